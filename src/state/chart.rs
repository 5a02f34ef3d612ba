use crate::dispatch::ChartSink;

/// Y value of the dashed threshold line, in percent
pub const THRESHOLD_PERCENT: f64 = 55.0;

/// Win probability series, appended to by the dispatcher
#[derive(Debug, Clone, Default)]
pub struct WinSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl WinSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Most recent value in percent
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Points as (index, percent) pairs, starting at x = 1
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| ((i + 1) as f64, *v))
            .collect()
    }
}

impl ChartSink for WinSeries {
    fn append_point(&mut self, label: String, value: f64) {
        self.labels.push(label);
        self.values.push(value);
    }

    fn clear(&mut self) {
        self.labels.clear();
        self.values.clear();
    }

    fn point_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_append_and_clear() {
        let mut series = WinSeries::new();
        series.append_point("Event 1".to_string(), 48.2);
        series.append_point("Event 2".to_string(), 51.0);

        assert_eq!(series.point_count(), 2);
        assert_eq!(series.points(), vec![(1.0, 48.2), (2.0, 51.0)]);
        assert_eq!(series.latest(), Some(51.0));
        assert_eq!(series.labels()[1], "Event 2");

        series.clear();
        assert!(series.is_empty());
        assert_eq!(series.latest(), None);
    }
}
