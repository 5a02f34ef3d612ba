use crate::analytics::{PerformanceRow, Role};
use crate::dispatch::PerformanceRowSink;

/// Performance rows plus the current team composition
#[derive(Debug, Clone, Default)]
pub struct PerformancePanel {
    rows: [Option<PerformanceRow>; 3],
    team: Vec<String>,
}

impl PerformancePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row for a role, `None` until the first performance update
    pub fn row(&self, role: Role) -> Option<&PerformanceRow> {
        self.rows[role.index()].as_ref()
    }

    pub fn team(&self) -> &[String] {
        &self.team
    }
}

impl PerformanceRowSink for PerformancePanel {
    fn set_row(&mut self, role: Role, row: PerformanceRow) {
        self.rows[role.index()] = Some(row);
    }

    fn set_team_composition(&mut self, players: &[String]) {
        self.team = players.to_vec();
    }
}
