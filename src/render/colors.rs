//! Color module for the dashboard.
//!
//! This module provides:
//! - The proportion gradient used by the role indicators
//! - Row colors for each performance style
//! - Panel theme colors
//! - Conversion between `palette` colors and terminal colors

use palette::Srgb;
use ratatui::style::Color;

use crate::analytics::RowStyle;

/// Dark gray, the color of an indicator with no weight (#151515)
pub const GRADIENT_START: Srgb<u8> = Srgb::new(21, 21, 21);

/// Accent blue, the color of an indicator with all the weight (#007bff)
pub const GRADIENT_END: Srgb<u8> = Srgb::new(0, 123, 255);

/// Linear gradient between two fixed endpoint colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub start: Srgb<u8>,
    pub end: Srgb<u8>,
}

impl Gradient {
    pub fn new(start: Srgb<u8>, end: Srgb<u8>) -> Self {
        Self { start, end }
    }

    /// Color at `proportion` along the gradient.
    ///
    /// Each channel is `round(start + p * (end - start))`. The input is not
    /// clamped; callers pass values in [0, 1].
    pub fn interpolate(&self, proportion: f64) -> Srgb<u8> {
        let channel = |from: u8, to: u8| -> u8 {
            let from = from as f64;
            let to = to as f64;
            (from + proportion * (to - from)).round() as u8
        };

        Srgb::new(
            channel(self.start.red, self.end.red),
            channel(self.start.green, self.end.green),
            channel(self.start.blue, self.end.blue),
        )
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::new(GRADIENT_START, GRADIENT_END)
    }
}

/// Parse `#rrggbb` (or `rrggbb`) into a color
pub fn parse_hex_color(value: &str) -> Result<Srgb<u8>, String> {
    value
        .parse::<Srgb<u8>>()
        .map_err(|e| format!("invalid color `{}`: {}", value, e))
}

/// Convert a palette color into a terminal color
pub fn to_color(color: Srgb<u8>) -> Color {
    Color::Rgb(color.red, color.green, color.blue)
}

/// Row background per performance style (bootstrap-like)
pub fn row_style_color(style: RowStyle) -> Color {
    match style {
        RowStyle::Success => Color::Rgb(25, 135, 84),
        RowStyle::Warning => Color::Rgb(255, 193, 7),
        RowStyle::Danger => Color::Rgb(220, 53, 69),
        RowStyle::Secondary => Color::Rgb(108, 117, 125),
    }
}

/// Text color that stays readable on top of `row_style_color`
pub fn row_text_color(style: RowStyle) -> Color {
    match style {
        RowStyle::Warning => Color::Rgb(20, 20, 20),
        _ => Color::Rgb(245, 245, 245),
    }
}

/// Win probability line (deep blue)
pub const CHART_LINE: Color = Color::Rgb(41, 128, 185);

/// Threshold line (bright red)
pub const CHART_THRESHOLD: Color = Color::Rgb(231, 76, 60);

/// Panel borders and axis labels
pub const PANEL_BORDER: Color = Color::Rgb(70, 70, 90);
pub const LABEL: Color = Color::Rgb(100, 100, 120);
pub const VALUE: Color = Color::Rgb(180, 180, 200);
pub const ACCENT: Color = Color::Rgb(100, 200, 150);

/// Highlighted rules table rows
pub const TABLE_HIGHLIGHT: Color = Color::Rgb(40, 60, 100);

/// Dim a color by a factor (0.0 = black, 1.0 = unchanged)
///
/// For non-RGB colors, returns the original color unchanged.
pub fn dim_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * factor) as u8,
            (g as f32 * factor) as u8,
            (b as f32 * factor) as u8,
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        let gradient = Gradient::default();
        assert_eq!(gradient.interpolate(0.0), GRADIENT_START);
        assert_eq!(gradient.interpolate(1.0), GRADIENT_END);
    }

    #[test]
    fn test_midpoint_rounds() {
        let gradient = Gradient::default();
        // 21 + 0.5 * -21 = 10.5, 21 + 0.5 * 102 = 72, 21 + 0.5 * 234 = 138
        assert_eq!(gradient.interpolate(0.5), Srgb::new(11, 72, 138));
    }

    #[test]
    fn test_uniform_third() {
        let gradient = Gradient::default();
        let c = gradient.interpolate(1.0 / 3.0);
        assert_eq!(c, Srgb::new(14, 55, 99));
    }

    #[test]
    fn test_monotonic_per_channel() {
        let gradient = Gradient::default();
        let mut previous = gradient.interpolate(0.0);
        for step in 1..=100 {
            let c = gradient.interpolate(step as f64 / 100.0);
            assert!(c.red <= previous.red);
            assert!(c.green >= previous.green);
            assert!(c.blue >= previous.blue);
            previous = c;
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#151515").unwrap(), GRADIENT_START);
        assert_eq!(parse_hex_color("007bff").unwrap(), GRADIENT_END);
        assert!(parse_hex_color("blue").is_err());
    }

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(GRADIENT_END), Color::Rgb(0, 123, 255));
    }

    #[test]
    fn test_dim_color_rgb() {
        let dimmed = dim_color(Color::Rgb(100, 200, 50), 0.5);
        assert_eq!(dimmed, Color::Rgb(50, 100, 25));
    }

    #[test]
    fn test_dim_color_non_rgb() {
        assert_eq!(dim_color(Color::Blue, 0.5), Color::Blue);
    }
}
