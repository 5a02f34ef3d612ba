use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Widget},
};

use crate::analytics::{Role, RowStyle};
use crate::state::PerformancePanel;

use super::colors::{row_style_color, row_text_color, LABEL, PANEL_BORDER, VALUE};

/// Performance rows, one colored band per role, with the team below
pub struct PerformanceWidget<'a> {
    panel: &'a PerformancePanel,
}

impl<'a> PerformanceWidget<'a> {
    pub fn new(panel: &'a PerformancePanel) -> Self {
        Self { panel }
    }
}

/// Write `text` centered on row `y`, filling the row with `style`
fn centered_band(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    for x in area.x..area.x + area.width {
        buf[(x, y)].set_char(' ').set_style(style);
    }
    let len = text.chars().count() as u16;
    let mut x = area.x + area.width.saturating_sub(len) / 2;
    for ch in text.chars() {
        if x >= area.x + area.width {
            break;
        }
        buf[(x, y)].set_char(ch).set_style(style);
        x += 1;
    }
}

impl Widget for PerformanceWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Performance ")
            .border_style(Style::default().fg(PANEL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut y = inner.y;
        for role in Role::ALL {
            if y >= inner.y + inner.height {
                return;
            }

            let (text, style) = match self.panel.row(role) {
                Some(row) => (row.text.clone(), row.style),
                None => (format!("{}: waiting", role.name()), RowStyle::Secondary),
            };
            let band = Style::default()
                .bg(row_style_color(style))
                .fg(row_text_color(style))
                .add_modifier(Modifier::BOLD);
            centered_band(buf, inner, y, &text, band);
            y += 1;
        }

        let team = self.panel.team();
        if team.is_empty() || y + 1 >= inner.y + inner.height {
            return;
        }

        y += 1;
        let mut x = inner.x;
        let label_style = Style::default().fg(LABEL);
        let value_style = Style::default().fg(VALUE);
        let members = team.join(", ");
        for (text, style) in [("Team: ", label_style), (members.as_str(), value_style)] {
            for ch in text.chars() {
                if x >= inner.x + inner.width {
                    return;
                }
                buf[(x, y)].set_char(ch).set_style(style);
                x += 1;
            }
        }
    }
}
