//! Render ports the dispatcher writes into.
//!
//! The dashboard state implements these for the terminal UI; tests implement
//! them with plain recorders.

use palette::Srgb;

use crate::analytics::{PerformanceRow, Role};

/// Win probability time series
pub trait ChartSink {
    /// Append one point to the end of the series
    fn append_point(&mut self, label: String, value: f64);
    /// Drop every point
    fn clear(&mut self);
    /// Number of points currently in the series
    fn point_count(&self) -> usize;
}

/// Per-role count text and proportion color
pub trait RoleIndicatorSink {
    fn set_count_text(&mut self, role: Role, text: String);
    fn set_color(&mut self, role: Role, color: Srgb<u8>);
    /// Whether the counts shown are the zero "no data" state
    fn set_no_data(&mut self, no_data: bool);
}

/// Per-role performance rows
pub trait PerformanceRowSink {
    fn set_row(&mut self, role: Role, row: PerformanceRow);

    /// Players currently on the team; ignored by default
    fn set_team_composition(&mut self, _players: &[String]) {}
}

/// Container for the pre-rendered rules table
pub trait RulesTableSink {
    fn set_table_html(&mut self, html: &str);
}

/// Every render target the dispatcher may address.
///
/// `None` means the target is not present; the dispatcher logs and skips.
pub trait RenderTargets {
    fn chart(&mut self) -> Option<&mut dyn ChartSink>;
    fn role_indicators(&mut self) -> Option<&mut dyn RoleIndicatorSink>;
    fn performance_rows(&mut self) -> Option<&mut dyn PerformanceRowSink>;
    fn rules_table(&mut self) -> Option<&mut dyn RulesTableSink>;
}
