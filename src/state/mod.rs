pub mod chart;
pub mod dashboard;
pub mod performance;
pub mod roles;
pub mod rules;

pub use chart::{WinSeries, THRESHOLD_PERCENT};
pub use dashboard::{Dashboard, PanelLayout};
pub use performance::PerformancePanel;
pub use roles::{RoleIndicator, RolePanel};
pub use rules::{RulesPanel, TableLine};
