use crate::dispatch::{ChartSink, PerformanceRowSink, RenderTargets, RoleIndicatorSink, RulesTableSink};
use crate::render::colors::Gradient;

use super::{PerformancePanel, RolePanel, RulesPanel, WinSeries};

/// Which panels the dashboard shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub chart: bool,
    pub roles: bool,
    pub performance: bool,
    pub rules: bool,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            chart: true,
            roles: true,
            performance: true,
            rules: true,
        }
    }
}

/// All render targets of the terminal dashboard.
///
/// Disabled panels are absent, so messages addressed to them are skipped.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub chart: Option<WinSeries>,
    pub roles: Option<RolePanel>,
    pub performance: Option<PerformancePanel>,
    pub rules: Option<RulesPanel>,
}

impl Dashboard {
    pub fn new(layout: PanelLayout, gradient: &Gradient) -> Self {
        Self {
            chart: layout.chart.then(WinSeries::new),
            roles: layout.roles.then(|| RolePanel::new(gradient)),
            performance: layout.performance.then(PerformancePanel::new),
            rules: layout.rules.then(RulesPanel::new),
        }
    }
}

impl RenderTargets for Dashboard {
    fn chart(&mut self) -> Option<&mut dyn ChartSink> {
        self.chart.as_mut().map(|c| c as &mut dyn ChartSink)
    }

    fn role_indicators(&mut self) -> Option<&mut dyn RoleIndicatorSink> {
        self.roles.as_mut().map(|r| r as &mut dyn RoleIndicatorSink)
    }

    fn performance_rows(&mut self) -> Option<&mut dyn PerformanceRowSink> {
        self.performance
            .as_mut()
            .map(|p| p as &mut dyn PerformanceRowSink)
    }

    fn rules_table(&mut self) -> Option<&mut dyn RulesTableSink> {
        self.rules.as_mut().map(|r| r as &mut dyn RulesTableSink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{Role, RuleRecord};
    use crate::dispatch::Dispatcher;
    use crate::event::DashboardMessage;

    #[test]
    fn test_full_dashboard_pipeline() {
        let gradient = Gradient::default();
        let mut dashboard = Dashboard::new(PanelLayout::default(), &gradient);
        let dispatcher = Dispatcher::new(gradient);

        dispatcher.dispatch(&DashboardMessage::WinProbability(0.55), &mut dashboard);
        dispatcher.dispatch(
            &DashboardMessage::RulesTable {
                table_html: "<p>No rules found for these statuses</p>".to_string(),
                rules: Some(vec![RuleRecord::new("{YOU=Reinhardt, OTHER=Lucio}")]),
            },
            &mut dashboard,
        );

        assert_eq!(dashboard.chart.as_ref().unwrap().latest(), Some(55.0));
        let roles = dashboard.roles.as_ref().unwrap();
        assert_eq!(roles.indicator(Role::Tank).count_text, "2");
        assert_eq!(roles.indicator(Role::Support).count_text, "1");
        assert_eq!(dashboard.rules.as_ref().unwrap().lines().len(), 1);
    }

    #[test]
    fn test_disabled_panels_are_missing_targets() {
        let layout = PanelLayout {
            chart: false,
            rules: false,
            ..PanelLayout::default()
        };
        let mut dashboard = Dashboard::new(layout, &Gradient::default());

        assert!(dashboard.chart().is_none());
        assert!(dashboard.rules_table().is_none());
        assert!(dashboard.role_indicators().is_some());

        Dispatcher::default().dispatch(&DashboardMessage::WinProbability(0.3), &mut dashboard);
        assert!(dashboard.chart.is_none());
    }
}
