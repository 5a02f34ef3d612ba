//! Pure aggregation routines behind the role and performance indicators.
//!
//! Nothing in here touches the terminal or the message transport, so every
//! function can be exercised directly from tests.

pub mod performance;
pub mod proportion;
pub mod roles;
pub mod rules;

pub use performance::{format_row, PerformanceRow, PerformanceStatus, RowStyle};
pub use proportion::{ProportionVector, RoleWeights};
pub use roles::{aggregate_roles, HeroRoleTable, Role, RoleCounts};
pub use rules::{extract_heroes, RuleRecord};
