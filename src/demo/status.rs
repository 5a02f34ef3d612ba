//! Role statuses derived from scoreboard stats, the way the analytics backend
//! grades a team.

use crate::analytics::{PerformanceStatus, Role};
use crate::event::{PerformanceReport, RoleReport};

/// Label used when a role has no stats to grade yet
pub const NOT_ENOUGH_DATA: &str = "not enough data";

/// Scoreboard columns per player
pub const KILLS: usize = 0;
pub const ASSISTS: usize = 1;
pub const DEATHS: usize = 2;
pub const DAMAGE: usize = 3;
pub const HEALING: usize = 4;
pub const MITIGATION: usize = 5;

/// One scoreboard row: kills, assists, deaths, damage, healing, mitigation
pub type PlayerStats = [f64; 6];

/// Both teams: rows 0 tank, 1-2 damage, 3-4 support, 5-9 the enemy team in the
/// same order
pub type Scoreboard = [PlayerStats; 10];

/// Damage difference that separates an average damage pair from a good one
const DAMAGE_MARGIN: f64 = 274.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamStatuses {
    pub tank: PerformanceStatus,
    pub damage: PerformanceStatus,
    pub support: PerformanceStatus,
}

impl TeamStatuses {
    pub fn get(&self, role: Role) -> &PerformanceStatus {
        match role {
            Role::Tank => &self.tank,
            Role::Damage => &self.damage,
            Role::Support => &self.support,
        }
    }

    /// Whether any role could not be graded
    pub fn lacks_data(&self) -> bool {
        Role::ALL
            .iter()
            .any(|role| self.get(*role).as_str() == NOT_ENOUGH_DATA)
    }

    /// Performance message payload for these statuses
    pub fn report(&self, team_composition: &[String]) -> PerformanceReport {
        let entry = |role: Role| {
            let status = self.get(role).clone();
            RoleReport {
                text: format!("{}: {}", role.name(), status.as_str()),
                status,
            }
        };

        PerformanceReport {
            tank: entry(Role::Tank),
            damage: entry(Role::Damage),
            support: entry(Role::Support),
            team_composition: team_composition.to_vec(),
        }
    }
}

fn not_enough_data() -> PerformanceStatus {
    PerformanceStatus::from(NOT_ENOUGH_DATA)
}

/// Grade the tank on kills against the square root of mitigation
pub fn tank_status(stats: &Scoreboard) -> PerformanceStatus {
    let kills = stats[0][KILLS];
    let mitigation = stats[0][MITIGATION];
    if kills == 0.0 || mitigation == 0.0 {
        return not_enough_data();
    }

    let ratio = kills / (kills + mitigation.sqrt());
    if ratio <= 0.05 {
        PerformanceStatus::Poor
    } else if ratio > 0.04 && ratio < 0.08 {
        PerformanceStatus::Average
    } else {
        PerformanceStatus::Good
    }
}

/// Grade the damage pair on damage dealt against the enemy damage pair
pub fn damage_status(stats: &Scoreboard) -> PerformanceStatus {
    let ours = stats[1][DAMAGE] + stats[2][DAMAGE];
    let theirs = stats[6][DAMAGE] + stats[7][DAMAGE];
    if ours == 0.0 || theirs == 0.0 {
        return not_enough_data();
    }

    let lead = ours - theirs;
    if lead.abs() < DAMAGE_MARGIN {
        PerformanceStatus::Average
    } else if lead >= DAMAGE_MARGIN {
        PerformanceStatus::Good
    } else {
        PerformanceStatus::Poor
    }
}

/// Grade the support pair on the share of damage in their total output
pub fn support_status(stats: &Scoreboard) -> PerformanceStatus {
    let damage = stats[3][DAMAGE] + stats[4][DAMAGE];
    let healing = stats[3][HEALING] + stats[4][HEALING];
    if damage == 0.0 || healing == 0.0 {
        return not_enough_data();
    }

    let ratio = damage / (damage + healing);
    if ratio < 0.14 {
        PerformanceStatus::Poor
    } else if (0.185..=0.32).contains(&ratio) {
        PerformanceStatus::Average
    } else {
        PerformanceStatus::Good
    }
}

pub fn team_statuses(stats: &Scoreboard) -> TeamStatuses {
    let statuses = TeamStatuses {
        tank: tank_status(stats),
        damage: damage_status(stats),
        support: support_status(stats),
    };
    tracing::debug!(
        tank = statuses.tank.as_str(),
        damage = statuses.damage.as_str(),
        support = statuses.support.as_str(),
        "graded team"
    );
    statuses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Scoreboard {
        [[0.0; 6]; 10]
    }

    #[test]
    fn test_empty_board_lacks_data() {
        let statuses = team_statuses(&board());
        assert!(statuses.lacks_data());
        assert_eq!(statuses.tank.as_str(), NOT_ENOUGH_DATA);
        assert_eq!(statuses.damage.as_str(), NOT_ENOUGH_DATA);
        assert_eq!(statuses.support.as_str(), NOT_ENOUGH_DATA);
    }

    #[test]
    fn test_tank_thresholds() {
        let mut stats = board();
        stats[0][MITIGATION] = 10_000.0; // sqrt = 100

        stats[0][KILLS] = 2.0; // 2 / 102 ~ 0.0196
        assert_eq!(tank_status(&stats), PerformanceStatus::Poor);

        stats[0][KILLS] = 6.0; // 6 / 106 ~ 0.0566
        assert_eq!(tank_status(&stats), PerformanceStatus::Average);

        stats[0][KILLS] = 20.0; // 20 / 120 ~ 0.1667
        assert_eq!(tank_status(&stats), PerformanceStatus::Good);
    }

    #[test]
    fn test_damage_thresholds() {
        let mut stats = board();
        stats[6][DAMAGE] = 1_000.0;
        stats[7][DAMAGE] = 1_000.0;

        stats[1][DAMAGE] = 1_100.0;
        stats[2][DAMAGE] = 1_000.0;
        assert_eq!(damage_status(&stats), PerformanceStatus::Average);

        stats[1][DAMAGE] = 1_274.0;
        assert_eq!(damage_status(&stats), PerformanceStatus::Good);

        stats[1][DAMAGE] = 500.0;
        assert_eq!(damage_status(&stats), PerformanceStatus::Poor);
    }

    #[test]
    fn test_support_thresholds() {
        let mut stats = board();
        stats[3][HEALING] = 900.0;

        stats[3][DAMAGE] = 100.0; // 0.10
        assert_eq!(support_status(&stats), PerformanceStatus::Poor);

        stats[3][DAMAGE] = 300.0; // 0.25
        assert_eq!(support_status(&stats), PerformanceStatus::Average);

        stats[3][DAMAGE] = 150.0; // ~0.143, between the bands
        assert_eq!(support_status(&stats), PerformanceStatus::Good);

        stats[3][DAMAGE] = 900.0; // 0.5
        assert_eq!(support_status(&stats), PerformanceStatus::Good);
    }

    #[test]
    fn test_report_text() {
        let statuses = TeamStatuses {
            tank: PerformanceStatus::Good,
            damage: PerformanceStatus::Poor,
            support: not_enough_data(),
        };
        let report = statuses.report(&["Winston".to_string()]);
        assert_eq!(report.tank.text, "Tank: good");
        assert_eq!(report.support.text, "Support: not enough data");
        assert_eq!(report.team_composition, vec!["Winston"]);
    }
}
