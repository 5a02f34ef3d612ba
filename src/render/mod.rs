pub mod activity_log;
pub mod chart;
pub mod colors;
pub mod performance;
pub mod roles;
pub mod rules_table;
pub mod ui;

pub use activity_log::{LogEntry, MessageLog, MessageLogWidget};
pub use chart::WinChartWidget;
pub use colors::Gradient;
pub use performance::PerformanceWidget;
pub use roles::RoleIndicatorsWidget;
pub use rules_table::RulesTableWidget;
pub use ui::{HelpOverlay, StatusBar};
