use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use super::colors::{ACCENT, LABEL, VALUE};

/// Status bar at the bottom of the screen
pub struct StatusBar<'a> {
    source: &'a str,
    messages: usize,
    points: usize,
    fps: u32,
}

impl<'a> StatusBar<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            messages: 0,
            points: 0,
            fps: 30,
        }
    }

    /// Total number of messages dispatched
    pub fn messages(mut self, messages: usize) -> Self {
        self.messages = messages;
        self
    }

    /// Points in the current win probability series
    pub fn points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }

    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }
}

/// Write `text` from `x`, stopping before `limit`; returns the next column
fn put_text(buf: &mut Buffer, mut x: u16, y: u16, limit: u16, text: &str, style: Style) -> u16 {
    for ch in text.chars() {
        if x >= limit {
            break;
        }
        buf[(x, y)].set_char(ch).set_style(style);
        x += 1;
    }
    x
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height == 0 {
            return;
        }

        let bg_style = Style::default().bg(Color::Rgb(25, 25, 35));
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_style(bg_style);
        }

        let limit = area.x + area.width - 1;
        let label_style = Style::default().fg(LABEL);
        let value_style = Style::default().fg(VALUE);
        let accent_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut x = area.x + 1;
        x = put_text(buf, x, area.y, limit, "◈ TEAMBOARD", accent_style) + 2;
        x = put_text(buf, x, area.y, limit, &format!("Source: {}", self.source), label_style) + 2;
        x = put_text(buf, x, area.y, limit, &format!("Messages: {}", self.messages), value_style) + 2;
        x = put_text(buf, x, area.y, limit, &format!("Points: {}", self.points), value_style) + 2;
        put_text(buf, x, area.y, limit, &format!("{} fps", self.fps), label_style);

        // Right-aligned help hint
        let help_text = "?:help q:quit";
        let help_x = (area.x + area.width).saturating_sub(help_text.len() as u16 + 1);
        if help_x > x {
            put_text(buf, help_x, area.y, limit, help_text, label_style);
        }
    }
}

/// Help overlay widget
pub struct HelpOverlay;

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let box_width = 40u16.min(area.width);
        let box_height = 10u16.min(area.height);
        if box_width < 10 || box_height < 5 {
            return;
        }
        let box_x = area.x + (area.width - box_width) / 2;
        let box_y = area.y + (area.height - box_height) / 2;

        let box_bg = Style::default().bg(Color::Rgb(35, 35, 45));
        for y in box_y..box_y + box_height {
            for x in box_x..box_x + box_width {
                buf[(x, y)].set_char(' ').set_style(box_bg);
            }
        }

        let border_style = Style::default().fg(ACCENT);
        for x in box_x..box_x + box_width {
            buf[(x, box_y)].set_char('─').set_style(border_style);
            buf[(x, box_y + box_height - 1)].set_char('─').set_style(border_style);
        }
        for y in box_y..box_y + box_height {
            buf[(box_x, y)].set_char('│').set_style(border_style);
            buf[(box_x + box_width - 1, y)].set_char('│').set_style(border_style);
        }
        buf[(box_x, box_y)].set_char('╭').set_style(border_style);
        buf[(box_x + box_width - 1, box_y)].set_char('╮').set_style(border_style);
        buf[(box_x, box_y + box_height - 1)].set_char('╰').set_style(border_style);
        buf[(box_x + box_width - 1, box_y + box_height - 1)]
            .set_char('╯')
            .set_style(border_style);

        let title = " Controls ";
        let title_x = box_x + (box_width.saturating_sub(title.len() as u16)) / 2;
        put_text(buf, title_x, box_y, box_x + box_width - 1, title, border_style.add_modifier(Modifier::BOLD));

        let key_style = Style::default()
            .fg(Color::Rgb(200, 200, 100))
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(Color::Rgb(180, 180, 190));

        let controls = [
            ("q, Esc", "Quit"),
            ("l", "Toggle message log"),
            ("c", "Clear message log"),
            ("?", "Toggle this help"),
        ];

        let limit = box_x + box_width - 2;
        let mut y = box_y + 2;
        for (key, desc) in controls {
            if y >= box_y + box_height - 2 {
                break;
            }
            put_text(buf, box_x + 3, y, limit, key, key_style);
            put_text(buf, box_x + 13, y, limit, desc, desc_style);
            y += 1;
        }

        let footer = "Press any key to close";
        let footer_x = box_x + (box_width.saturating_sub(footer.len() as u16)) / 2;
        put_text(
            buf,
            footer_x,
            box_y + box_height - 2,
            box_x + box_width - 1,
            footer,
            Style::default().fg(LABEL),
        );
    }
}
