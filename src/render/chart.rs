use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Widget},
};

use crate::state::{WinSeries, THRESHOLD_PERCENT};

use super::colors::{CHART_LINE, CHART_THRESHOLD, LABEL, PANEL_BORDER, VALUE};

/// Line chart of win probability per event with the threshold line
pub struct WinChartWidget<'a> {
    series: &'a WinSeries,
}

impl<'a> WinChartWidget<'a> {
    pub fn new(series: &'a WinSeries) -> Self {
        Self { series }
    }

    fn title(&self) -> String {
        match (self.series.latest(), self.series.labels().last()) {
            (Some(latest), Some(label)) => format!(" Win Probability  {:.1}% ({}) ", latest, label),
            _ => " Win Probability ".to_string(),
        }
    }
}

impl Widget for WinChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let points = self.series.points();
        // Always leave room for at least a handful of events on the x axis
        let x_max = (points.len() as f64).max(10.0);
        let threshold = [(1.0, THRESHOLD_PERCENT), (x_max, THRESHOLD_PERCENT)];

        let datasets = vec![
            Dataset::default()
                .name("Threshold")
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(CHART_THRESHOLD))
                .data(&threshold),
            Dataset::default()
                .name("Win Probability")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(CHART_LINE).add_modifier(Modifier::BOLD))
                .data(&points),
        ];

        let axis_style = Style::default().fg(LABEL);
        let x_labels = vec![
            Span::styled("1", axis_style),
            Span::styled(format!("{}", x_max as usize), axis_style),
        ];
        let y_labels = vec![
            Span::styled("0", axis_style),
            Span::styled("50", axis_style),
            Span::styled("100", axis_style),
        ];

        Chart::new(datasets)
            .block(
                Block::bordered()
                    .title(Span::styled(self.title(), Style::default().fg(VALUE)))
                    .border_style(Style::default().fg(PANEL_BORDER)),
            )
            .x_axis(
                Axis::default()
                    .title(Span::styled("Events", axis_style))
                    .style(axis_style)
                    .bounds([1.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled("Win %", axis_style))
                    .style(axis_style)
                    .bounds([0.0, 100.0])
                    .labels(y_labels),
            )
            .render(area, buf);
    }
}
