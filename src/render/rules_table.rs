use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Widget},
};

use crate::state::RulesPanel;

use super::colors::{ACCENT, LABEL, PANEL_BORDER, TABLE_HIGHLIGHT, VALUE};

/// Text rendering of the latest rules table
pub struct RulesTableWidget<'a> {
    panel: &'a RulesPanel,
}

impl<'a> RulesTableWidget<'a> {
    pub fn new(panel: &'a RulesPanel) -> Self {
        Self { panel }
    }
}

impl Widget for RulesTableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Team Rules ")
            .border_style(Style::default().fg(PANEL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let lines = self.panel.lines();
        if lines.is_empty() {
            let hint = "Waiting for rules...";
            for (i, ch) in hint.chars().enumerate() {
                if i as u16 >= inner.width {
                    break;
                }
                buf[(inner.x + i as u16, inner.y)]
                    .set_char(ch)
                    .set_style(Style::default().fg(LABEL));
            }
            return;
        }

        for (row, line) in lines.iter().take(inner.height as usize).enumerate() {
            let y = inner.y + row as u16;
            let style = if line.header {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else if line.highlighted {
                Style::default().fg(VALUE).bg(TABLE_HIGHLIGHT)
            } else {
                Style::default().fg(VALUE)
            };

            if line.highlighted {
                for x in inner.x..inner.x + inner.width {
                    buf[(x, y)].set_style(style);
                }
            }

            let mut x = inner.x + 1;
            for ch in line.text.chars() {
                if x >= inner.x + inner.width {
                    break;
                }
                buf[(x, y)].set_char(ch).set_style(style);
                x += 1;
            }
        }
    }
}
