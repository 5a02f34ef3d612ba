//! Message log widget for displaying recently received messages.
//!
//! The log shows a chronological list of dispatched messages with the newest
//! entries at the bottom. Entries fade based on age to show recency.

use std::collections::VecDeque;
use std::time::Instant;

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Widget},
};

use crate::event::DashboardMessage;

use super::colors::{dim_color, ACCENT, CHART_LINE, CHART_THRESHOLD, PANEL_BORDER, VALUE};

/// A single entry in the message log.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// When this entry was created (for fading)
    pub timestamp: Instant,
    /// Wall clock time shown next to the entry
    pub received_at: DateTime<Local>,
    /// Wire name of the message
    pub event: &'static str,
    /// Short summary of the payload
    pub message: String,
    /// Color associated with this kind of message
    pub color: Color,
}

impl LogEntry {
    /// Create a log entry for a dispatched message.
    pub fn from_message(message: &DashboardMessage) -> Self {
        Self {
            timestamp: Instant::now(),
            received_at: Local::now(),
            event: message.event_name(),
            message: message.summary(),
            color: event_color(message),
        }
    }

    /// Get the age of this entry in seconds.
    pub fn age_seconds(&self) -> f32 {
        self.timestamp.elapsed().as_secs_f32()
    }
}

fn event_color(message: &DashboardMessage) -> Color {
    match message {
        DashboardMessage::WinProbability(_) => CHART_LINE,
        DashboardMessage::ChartReset => CHART_THRESHOLD,
        DashboardMessage::RulesTable { .. } | DashboardMessage::RulesUpdate(_) => ACCENT,
        DashboardMessage::Performance(_) => Color::Rgb(255, 193, 7),
    }
}

/// Bounded log of received messages.
#[derive(Debug)]
pub struct MessageLog {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
}

impl MessageLog {
    /// Create a new log with a maximum number of entries.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Record a message. If the log is at capacity, the oldest entry is removed.
    pub fn record(&mut self, message: &DashboardMessage) {
        self.push(LogEntry::from_message(message));
    }

    fn push(&mut self, entry: LogEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Get an iterator over the entries (oldest first).
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Widget for rendering the message log.
pub struct MessageLogWidget<'a> {
    log: &'a MessageLog,
    /// Maximum age in seconds before an entry is fully faded
    max_age: f32,
}

impl<'a> MessageLogWidget<'a> {
    pub fn new(log: &'a MessageLog) -> Self {
        Self { log, max_age: 30.0 }
    }

    /// Start fading after 5 seconds, bottom out at 30% at max_age
    fn opacity_for_age(&self, age_seconds: f32) -> f32 {
        let fade_start = 5.0;
        if age_seconds < fade_start {
            1.0
        } else {
            let fade_progress = (age_seconds - fade_start) / (self.max_age - fade_start);
            (1.0 - fade_progress).clamp(0.3, 1.0)
        }
    }
}

impl Widget for MessageLogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Messages ")
            .border_style(Style::default().fg(PANEL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let entries: Vec<_> = self.log.entries().collect();
        let start_idx = entries.len().saturating_sub(inner.height as usize);

        for (row, entry) in entries[start_idx..].iter().enumerate() {
            let y = inner.y + row as u16;
            let opacity = self.opacity_for_age(entry.age_seconds());

            let time_style = Style::default().fg(dim_color(Color::Rgb(100, 100, 120), opacity));
            let event_style = Style::default().fg(dim_color(entry.color, opacity));
            let msg_style = Style::default().fg(dim_color(VALUE, opacity));

            // Format: "12:04:33 update_chart win 51.2%"
            let time = entry.received_at.format("%H:%M:%S").to_string();
            let mut x = inner.x;
            let right = inner.x + inner.width;
            for (text, style) in [
                (time.as_str(), time_style),
                (entry.event, event_style),
                (entry.message.as_str(), msg_style),
            ] {
                for ch in text.chars() {
                    if x >= right {
                        break;
                    }
                    buf[(x, y)].set_char(ch).set_style(style);
                    x += 1;
                }
                x += 1;
                if x >= right {
                    break;
                }
            }
        }
    }
}
