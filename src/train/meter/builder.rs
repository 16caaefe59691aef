//! Validation meter formatting.

use super::sparkline::sparkline;
use super::trend::{MetricGoal, Trend};
use crate::train::callback::MetricHistory;

/// Formats one line per metric summarizing its validation series.
///
/// ```text
/// val_loss: 0.2800 ↓ -0.0200 (best: 0.2800) ▇▅▁
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MetricMeterBuilder<'a> {
    history: &'a MetricHistory,
    sparkline_width: usize,
}

impl<'a> MetricMeterBuilder<'a> {
    /// Create a builder over the accumulated history.
    pub fn new(history: &'a MetricHistory) -> Self {
        Self {
            history,
            sparkline_width: 20,
        }
    }

    /// Set sparkline width.
    pub fn sparkline_width(mut self, width: usize) -> Self {
        self.sparkline_width = width;
        self
    }

    /// Build the meter line for a metric.
    pub fn build(&self, metric: &str) -> String {
        let values = self.history.validation(metric).unwrap_or_default();
        let Some(&last) = values.last() else {
            return format!("val_{metric}: n/a");
        };

        let goal = MetricGoal::for_metric(metric);
        let trend = Trend::from_values(values);

        let delta = match values {
            [.., prev, last] if prev.is_finite() && last.is_finite() => {
                format!(" {:+.4}", last - prev)
            }
            _ => String::new(),
        };

        let best = goal
            .best(values)
            .map(|b| format!(" (best: {b:.4})"))
            .unwrap_or_default();

        let spark = sparkline(values, self.sparkline_width);
        let spark = if spark.is_empty() { spark } else { format!(" {spark}") };

        format!("val_{metric}: {last:.4} {}{delta}{best}{spark}", trend.arrow())
    }

    /// Build meter lines for every tracked metric, in configured order.
    pub fn build_all(&self) -> Vec<String> {
        self.history.tracks().iter().map(|t| self.build(t.name())).collect()
    }
}
