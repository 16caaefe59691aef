//! Chart model: one subplot per metric sharing the evaluation-step axis.

use crate::train::callback::MetricHistory;

/// One labelled series in a subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Legend label (`loss`, `val_loss`, ...)
    pub label: String,
    /// Values aligned with [`Figure::x`]
    pub values: Vec<f32>,
}

/// Chart for a single metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Subplot {
    /// Metric name
    pub metric: String,
    /// Training line first, then validation if present
    pub lines: Vec<Line>,
}

/// A full redraw: every tracked metric against the shared x-axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Evaluation step indices
    pub x: Vec<usize>,
    /// One subplot per tracked metric, in configured order
    pub subplots: Vec<Subplot>,
}

impl Figure {
    /// Snapshot the history into a figure.
    ///
    /// Returns `None` until at least one evaluation step is recorded.
    pub fn from_history(history: &MetricHistory, with_validation: bool) -> Option<Self> {
        if history.is_empty() {
            return None;
        }

        let subplots = history
            .tracks()
            .iter()
            .map(|track| {
                let mut lines = vec![Line {
                    label: track.name().to_string(),
                    values: track.train().to_vec(),
                }];
                if with_validation {
                    lines.push(Line {
                        label: format!("val_{}", track.name()),
                        values: track.validation().to_vec(),
                    });
                }
                Subplot {
                    metric: track.name().to_string(),
                    lines,
                }
            })
            .collect();

        Some(Self {
            x: history.steps().to_vec(),
            subplots,
        })
    }

    /// Number of points on the shared axis
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the figure has no points
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
