//! Association rule catalogue: deduplication at load time, filtering by team
//! status and the rules table pushed alongside each performance update.

use std::cmp::Ordering;
use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::analytics::{HeroRoleTable, Role, RuleRecord};
use crate::event::DashboardMessage;

use super::status::TeamStatuses;

/// Shown instead of a table when no rule matches
pub const NO_RULES_HTML: &str = "<p>No rules found for these statuses</p>";

/// Item prefixes that describe the game state rather than a hero
const STATUS_PREFIXES: [&str; 4] = ["TANK=", "DPS=", "SUP=", "RESULT="];

#[derive(Debug, Clone)]
struct CatalogueRule {
    record: RuleRecord,
    /// Sorted union of lhs and rhs items
    combined: Vec<String>,
}

/// A rule that survived filtering, with its display form
#[derive(Debug, Clone)]
struct RankedRule<'a> {
    record: &'a RuleRecord,
    display: String,
    num_exist: usize,
}

/// Deduplicated rule set the demo backend serves from
#[derive(Debug, Clone, Default)]
pub struct RuleCatalogue {
    rules: Vec<CatalogueRule>,
}

/// Non-empty, trimmed items of a `{a, b, c}` string
fn items(text: &str) -> impl Iterator<Item = &str> {
    text.trim()
        .trim_matches(|c| c == '{' || c == '}')
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

impl RuleCatalogue {
    /// Merge each rule's sides into one sorted item list and drop rules whose
    /// merged list was already seen (symmetric duplicates).
    pub fn preprocess(records: Vec<RuleRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut rules = Vec::new();

        for record in records {
            let mut combined: Vec<String> = items(record.lhs.as_deref().unwrap_or_default())
                .chain(items(&record.rhs))
                .map(str::to_string)
                .collect();
            combined.sort();

            if seen.insert(combined.clone()) {
                rules.push(CatalogueRule { record, combined });
            }
        }

        tracing::info!(rules = rules.len(), "rule catalogue ready");
        Self { rules }
    }

    /// Random catalogue over the built-in roster
    pub fn synthetic<R: Rng>(rng: &mut R, size: usize) -> Self {
        let table = HeroRoleTable::global();
        let roster: Vec<Vec<&str>> = Role::ALL.iter().map(|r| table.heroes(*r).collect()).collect();
        let grades = ["good", "average", "poor"];

        let records = (0..size)
            .map(|_| {
                let mut pick = |role: Role| {
                    roster[role.index()]
                        .choose(rng)
                        .copied()
                        .unwrap_or_default()
                        .to_string()
                };
                let you = pick(Role::Support);
                let tank = pick(Role::Tank);
                let dps = pick(Role::Damage);

                let lhs = format!(
                    "{{TANK={}, DPS={}, SUP={}, RESULT={}, YOU={}}}",
                    grades.choose(rng).unwrap_or(&"good"),
                    grades.choose(rng).unwrap_or(&"good"),
                    grades.choose(rng).unwrap_or(&"good"),
                    rng.gen_range(0..=1),
                    you
                );
                let rhs = format!("{{CHAR_1_TANK={}, CHAR_2_DPS={}}}", tank, dps);

                RuleRecord {
                    lhs: Some(lhs),
                    rhs,
                    support: Some(rng.gen_range(0.01..0.2)),
                    confidence: Some(rng.gen_range(0.3..0.95)),
                    lift: Some(rng.gen_range(1.0..3.5)),
                }
            })
            .collect();

        Self::preprocess(records)
    }

    /// Every rule, as pushed when a viewer first connects
    pub fn records(&self) -> Vec<RuleRecord> {
        self.rules.iter().map(|r| r.record.clone()).collect()
    }

    /// Build the rules table message for the current game state.
    ///
    /// Rules must carry every status item (or just `RESULT=1` while any role
    /// lacks data), are ranked by how many of their heroes are on the team and
    /// then by lift, and rules naming nobody on the team are dropped.
    pub fn rules_table(
        &self,
        statuses: &TeamStatuses,
        win_probability: f64,
        team: &[String],
    ) -> DashboardMessage {
        let outcome = if statuses.lacks_data() || win_probability > 0.5 { 1 } else { 0 };
        let required: Vec<String> = if statuses.lacks_data() {
            vec!["RESULT=1".to_string()]
        } else {
            vec![
                format!("TANK={}", statuses.tank.as_str()),
                format!("DPS={}", statuses.damage.as_str()),
                format!("SUP={}", statuses.support.as_str()),
                format!("RESULT={}", outcome),
            ]
        };

        let mut ranked: Vec<RankedRule<'_>> = self
            .rules
            .iter()
            .filter(|rule| required.iter().all(|item| rule.combined.contains(item)))
            .map(|rule| {
                let members = display_members(&rule.combined);
                let num_exist = members.iter().filter(|m| team.iter().any(|t| t == *m)).count();
                RankedRule {
                    record: &rule.record,
                    display: members.join(", "),
                    num_exist,
                }
            })
            .filter(|rule| rule.num_exist > 0)
            .collect();

        if ranked.is_empty() {
            return DashboardMessage::RulesTable {
                table_html: NO_RULES_HTML.to_string(),
                rules: None,
            };
        }

        ranked.sort_by(|a, b| {
            b.num_exist.cmp(&a.num_exist).then_with(|| {
                let lift = |r: &RankedRule<'_>| r.record.lift.unwrap_or(0.0);
                lift(b).partial_cmp(&lift(a)).unwrap_or(Ordering::Equal)
            })
        });

        let max_exist = ranked.iter().map(|r| r.num_exist).max().unwrap_or(0);
        let header = if outcome == 1 { "Winning Comps" } else { "Losing Comps" };

        DashboardMessage::RulesTable {
            table_html: table_html(header, max_exist, &ranked),
            rules: Some(ranked.iter().map(|r| r.record.clone()).collect()),
        }
    }
}

/// Hero names of a combined item list, status items removed
fn display_members(combined: &[String]) -> Vec<&str> {
    combined
        .iter()
        .filter(|item| !STATUS_PREFIXES.iter().any(|p| item.starts_with(p)))
        .map(|item| item.split('=').nth(1).unwrap_or(item).trim())
        .collect()
}

fn table_html(header: &str, max_exist: usize, ranked: &[RankedRule<'_>]) -> String {
    let rows: String = ranked
        .iter()
        .map(|rule| {
            let class = if max_exist > 1 && rule.num_exist == max_exist {
                "table-primary"
            } else {
                ""
            };
            format!(
                "<tr class=\"{}\"><td class=\"text-start\">{}</td></tr>",
                class, rule.display
            )
        })
        .collect();

    format!(
        "<table class=\"table table-hover theme-table\"><thead><tr><th class=\"theme-table-header text-center\">{} ({} player match)</th></tr></thead><tbody>{}</tbody></table>",
        header, max_exist, rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::PerformanceStatus;
    use crate::demo::status::NOT_ENOUGH_DATA;
    use crate::state::rules::table_lines;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rule(lhs: &str, rhs: &str, lift: f64) -> RuleRecord {
        RuleRecord {
            lhs: Some(lhs.to_string()),
            rhs: rhs.to_string(),
            lift: Some(lift),
            ..RuleRecord::default()
        }
    }

    fn statuses(tank: &str, damage: &str, support: &str) -> TeamStatuses {
        TeamStatuses {
            tank: tank.into(),
            damage: damage.into(),
            support: support.into(),
        }
    }

    fn team(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_symmetric_rules_are_merged() {
        let catalogue = RuleCatalogue::preprocess(vec![
            rule("{YOU=Ana}", "{OTHER=Genji}", 1.2),
            rule("{OTHER=Genji}", "{YOU=Ana}", 1.2),
            rule("{YOU=Ana}", "{OTHER=Mercy}", 1.1),
        ]);
        assert_eq!(catalogue.records().len(), 2);
    }

    #[test]
    fn test_rules_table_ranks_by_team_overlap_then_lift() {
        let catalogue = RuleCatalogue::preprocess(vec![
            rule("{TANK=good, DPS=good, SUP=good, RESULT=1, YOU=Ana}", "{CHAR_1_DPS=Genji}", 1.5),
            rule("{TANK=good, DPS=good, SUP=good, RESULT=1, YOU=Ana}", "{CHAR_1_DPS=Tracer}", 2.5),
            rule("{TANK=good, DPS=good, SUP=good, RESULT=1, YOU=Mercy}", "{CHAR_1_DPS=Echo}", 3.0),
            rule("{TANK=poor, DPS=good, SUP=good, RESULT=1, YOU=Ana}", "{CHAR_1_DPS=Genji}", 9.0),
            rule("{TANK=good, DPS=good, SUP=good, RESULT=1, YOU=Kiriko}", "{CHAR_1_DPS=Sombra}", 9.0),
        ]);

        let message = catalogue.rules_table(
            &statuses("good", "good", "good"),
            0.7,
            &team(&["Ana", "Genji", "Mercy"]),
        );

        let DashboardMessage::RulesTable { table_html, rules } = message else {
            panic!("expected a rules table");
        };
        let rules = rules.unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].rhs, "{CHAR_1_DPS=Genji}");
        assert_eq!(rules[1].rhs, "{CHAR_1_DPS=Echo}");
        assert_eq!(rules[2].rhs, "{CHAR_1_DPS=Tracer}");

        let lines = table_lines(&table_html);
        assert_eq!(lines[0].text, "Winning Comps (2 player match)");
        assert!(lines[1].highlighted);
        assert_eq!(lines[1].text, "Genji, Ana");
        assert!(!lines[2].highlighted);
    }

    #[test]
    fn test_losing_outcome_uses_result_zero() {
        let catalogue = RuleCatalogue::preprocess(vec![
            rule("{TANK=good, DPS=good, SUP=good, RESULT=0, YOU=Ana}", "{CHAR_1_DPS=Genji}", 1.5),
        ]);
        let message = catalogue.rules_table(&statuses("good", "good", "good"), 0.3, &team(&["Ana"]));
        let DashboardMessage::RulesTable { table_html, .. } = message else {
            panic!("expected a rules table");
        };
        assert!(table_html.contains("Losing Comps (1 player match)"));
        assert!(!table_html.contains("table-primary"));
    }

    #[test]
    fn test_missing_data_only_requires_win() {
        let catalogue = RuleCatalogue::preprocess(vec![
            rule("{TANK=poor, DPS=good, SUP=good, RESULT=1, YOU=Ana}", "{CHAR_1_DPS=Genji}", 1.5),
            rule("{TANK=poor, DPS=good, SUP=good, RESULT=0, YOU=Ana}", "{CHAR_1_DPS=Tracer}", 1.5),
        ]);
        let lacking = TeamStatuses {
            tank: PerformanceStatus::from(NOT_ENOUGH_DATA),
            ..statuses("good", "good", "good")
        };
        let message = catalogue.rules_table(&lacking, 0.1, &team(&["Ana"]));
        let DashboardMessage::RulesTable { rules, .. } = message else {
            panic!("expected a rules table");
        };
        let rules = rules.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].rhs, "{CHAR_1_DPS=Genji}");
    }

    #[test]
    fn test_no_match_sends_notice_without_rules() {
        let catalogue = RuleCatalogue::preprocess(vec![rule(
            "{TANK=good, DPS=good, SUP=good, RESULT=1, YOU=Ana}",
            "{CHAR_1_DPS=Genji}",
            1.5,
        )]);
        let message = catalogue.rules_table(&statuses("poor", "poor", "poor"), 0.9, &team(&["Ana"]));
        assert_eq!(
            message,
            DashboardMessage::RulesTable {
                table_html: NO_RULES_HTML.to_string(),
                rules: None,
            }
        );
    }

    #[test]
    fn test_synthetic_catalogue_is_deterministic_per_seed() {
        let a = RuleCatalogue::synthetic(&mut StdRng::seed_from_u64(7), 50);
        let b = RuleCatalogue::synthetic(&mut StdRng::seed_from_u64(7), 50);
        assert_eq!(a.records(), b.records());
        assert!(!a.records().is_empty());
    }
}
