use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Widget},
};

use crate::analytics::Role;
use crate::state::RolePanel;

use super::colors::{to_color, LABEL, PANEL_BORDER, VALUE};

/// Role balance: one row per role with its count and proportion swatch
pub struct RoleIndicatorsWidget<'a> {
    panel: &'a RolePanel,
    now: Instant,
}

impl<'a> RoleIndicatorsWidget<'a> {
    pub fn new(panel: &'a RolePanel) -> Self {
        Self {
            panel,
            now: Instant::now(),
        }
    }
}

impl Widget for RoleIndicatorsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.panel.has_data() {
            " Role Balance "
        } else {
            " Role Balance (no data) "
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(PANEL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 12 || inner.height == 0 {
            return;
        }

        let name_style = Style::default().fg(LABEL);
        let count_style = Style::default().fg(VALUE).add_modifier(Modifier::BOLD);
        let right = inner.x + inner.width;

        // One line per role, spaced out when there is room
        let spacing = (inner.height / Role::ALL.len() as u16).max(1);
        for (i, role) in Role::ALL.iter().enumerate() {
            let y = inner.y + i as u16 * spacing;
            if y >= inner.y + inner.height {
                break;
            }
            let indicator = self.panel.indicator(*role);

            // "Support   4 ████████"
            let mut x = inner.x + 1;
            for ch in format!("{:<8}", role.name()).chars() {
                buf[(x, y)].set_char(ch).set_style(name_style);
                x += 1;
            }
            for ch in format!("{:>3} ", indicator.count_text).chars() {
                if x >= right {
                    break;
                }
                buf[(x, y)].set_char(ch).set_style(count_style);
                x += 1;
            }

            let swatch = Style::default().bg(to_color(indicator.fade.current(self.now)));
            while x + 1 < right {
                buf[(x, y)].set_char(' ').set_style(swatch);
                x += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::RoleIndicatorSink;
    use crate::render::colors::Gradient;
    use palette::Srgb;
    use ratatui::style::Color;

    #[test]
    fn test_render_counts_and_swatches() {
        let mut panel = RolePanel::new(&Gradient::default());
        panel.set_count_text(Role::Tank, "6".to_string());

        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        RoleIndicatorsWidget::new(&panel).render(area, &mut buf);

        let row: String = (0..30).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("Tank"));
        assert!(row.contains('6'));
        let uniform = Gradient::default().interpolate(1.0 / 3.0);
        assert_eq!(buf[(20, 1)].bg, to_color(uniform));
    }

    #[test]
    fn test_title_marks_no_data() {
        let title = |panel: &RolePanel| {
            let area = Rect::new(0, 0, 40, 5);
            let mut buf = Buffer::empty(area);
            RoleIndicatorsWidget::new(panel).render(area, &mut buf);
            (0..40).map(|x| buf[(x, 0)].symbol().to_string()).collect::<String>()
        };

        let mut panel = RolePanel::new(&Gradient::default());
        assert!(title(&panel).contains("(no data)"));

        panel.set_no_data(false);
        assert!(!title(&panel).contains("(no data)"));
    }

    #[test]
    fn test_swatch_settles_on_target() {
        let mut panel = RolePanel::new(&Gradient::default());
        panel.set_color(Role::Support, Srgb::new(0, 123, 255));

        // inner rows: tank at y=1, damage at y=2, support at y=3
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        let mut widget = RoleIndicatorsWidget::new(&panel);
        widget.now += crate::animation::fade::FADE_DURATION;
        widget.render(area, &mut buf);
        assert_eq!(buf[(20, 3)].bg, Color::Rgb(0, 123, 255));
    }
}
