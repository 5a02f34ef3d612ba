//! Routes decoded messages into the render targets.
//!
//! Each call is one synchronous pass over a single message. Nothing here
//! returns an error: a bad payload degrades the display and the next message
//! supersedes it.

pub mod ports;

pub use ports::{ChartSink, PerformanceRowSink, RenderTargets, RoleIndicatorSink, RulesTableSink};

use crate::analytics::{
    aggregate_roles, extract_heroes, format_row, HeroRoleTable, Role, RoleCounts, RoleWeights,
    RuleRecord,
};
use crate::event::{DashboardMessage, PerformanceReport};
use crate::render::colors::Gradient;

/// Message dispatcher holding the static inputs of the aggregation pipeline
#[derive(Debug, Clone)]
pub struct Dispatcher {
    table: &'static HeroRoleTable,
    weights: RoleWeights,
    gradient: Gradient,
}

impl Dispatcher {
    pub fn new(gradient: Gradient) -> Self {
        Self {
            table: HeroRoleTable::global(),
            weights: RoleWeights::DEFAULT,
            gradient,
        }
    }

    pub fn with_weights(mut self, weights: RoleWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Apply one message to the render targets
    pub fn dispatch(&self, message: &DashboardMessage, targets: &mut dyn RenderTargets) {
        tracing::debug!(event = message.event_name(), "dispatching message");

        match message {
            DashboardMessage::WinProbability(probability) => {
                self.append_probability(*probability, targets)
            }
            DashboardMessage::ChartReset => match targets.chart() {
                Some(chart) => chart.clear(),
                None => tracing::warn!("no chart target, skipping reset"),
            },
            DashboardMessage::RulesTable { table_html, rules } => {
                match targets.rules_table() {
                    Some(table) => table.set_table_html(table_html),
                    None => tracing::warn!("no rules table target, skipping table render"),
                }
                self.update_roles(rules.as_deref(), targets);
            }
            DashboardMessage::RulesUpdate(rules) => self.update_roles(rules.as_deref(), targets),
            DashboardMessage::Performance(report) => self.update_performance(report, targets),
        }
    }

    /// Role counts for a rule set, recomputed from scratch on every call
    pub fn count_roles(&self, rules: &[RuleRecord]) -> RoleCounts {
        aggregate_roles(&extract_heroes(rules), self.table)
    }

    fn append_probability(&self, probability: f64, targets: &mut dyn RenderTargets) {
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            tracing::warn!(probability, "win probability out of range, ignoring");
            return;
        }

        let Some(chart) = targets.chart() else {
            tracing::warn!("no chart target, skipping point");
            return;
        };

        let label = format!("Event {}", chart.point_count() + 1);
        chart.append_point(label, percent_one_decimal(probability));
    }

    fn update_roles(&self, rules: Option<&[RuleRecord]>, targets: &mut dyn RenderTargets) {
        let counts = match rules {
            Some(rules) => self.count_roles(rules),
            None => {
                tracing::info!("no usable rules, showing empty role balance");
                RoleCounts::default()
            }
        };

        let Some(sink) = targets.role_indicators() else {
            tracing::warn!("no role indicator target, skipping role balance");
            return;
        };

        self.show_role_counts(&counts, sink);
    }

    /// Push counts and gradient colors for every role into the indicators
    pub fn show_role_counts(&self, counts: &RoleCounts, sink: &mut dyn RoleIndicatorSink) {
        let proportions = self.weights.proportions(counts);
        tracing::debug!(
            tank = counts.tank,
            damage = counts.damage,
            support = counts.support,
            "role balance updated"
        );

        sink.set_no_data(counts.is_empty());
        for role in Role::ALL {
            sink.set_count_text(role, counts.display_count(role).to_string());
            sink.set_color(role, self.gradient.interpolate(proportions.get(role)));
        }
    }

    fn update_performance(&self, report: &PerformanceReport, targets: &mut dyn RenderTargets) {
        let Some(rows) = targets.performance_rows() else {
            tracing::warn!("no performance target, skipping rows");
            return;
        };

        for role in Role::ALL {
            let entry = report.get(role);
            rows.set_row(role, format_row(&entry.status, &entry.text));
        }
        rows.set_team_composition(&report.team_composition);
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Gradient::default())
    }
}

/// Probability as a percentage rounded to one decimal
fn percent_one_decimal(probability: f64) -> f64 {
    (probability * 1000.0).round() / 10.0
}
