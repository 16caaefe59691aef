//! Trend and optimization direction for a metric series.

use std::fmt;

/// Trend direction for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    /// Metric is increasing
    Rising,
    /// Metric is decreasing
    Falling,
    /// Metric is relatively stable
    Stable,
}

impl Trend {
    /// Relative slope beyond which a series counts as moving.
    const THRESHOLD: f64 = 0.05;

    /// Compute trend from a series of values.
    ///
    /// Uses the least-squares slope relative to the series mean. Non-finite
    /// values are ignored.
    pub fn from_values(values: &[f32]) -> Self {
        let ys: Vec<f64> = values.iter().filter(|v| v.is_finite()).map(|&v| f64::from(v)).collect();
        if ys.len() < 2 {
            return Self::Stable;
        }

        let n = ys.len() as f64;
        let sum_x: f64 = (0..ys.len()).map(|i| i as f64).sum();
        let sum_y: f64 = ys.iter().sum();
        let sum_xy: f64 = ys.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();
        let sum_x2: f64 = (0..ys.len()).map(|i| (i as f64).powi(2)).sum();

        let denominator = n * sum_x2 - sum_x.powi(2);
        if denominator.abs() < f64::EPSILON {
            return Self::Stable;
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let mean = sum_y / n;
        if mean.abs() < f64::EPSILON {
            return Self::Stable;
        }

        let relative_slope = slope / mean.abs();
        if relative_slope > Self::THRESHOLD {
            Self::Rising
        } else if relative_slope < -Self::THRESHOLD {
            Self::Falling
        } else {
            Self::Stable
        }
    }

    /// Arrow glyph.
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Rising => "↑",
            Self::Falling => "↓",
            Self::Stable => "→",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rising => write!(f, "rising"),
            Self::Falling => write!(f, "falling"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// Which direction counts as an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricGoal {
    /// Lower is better (losses, errors)
    Minimize,
    /// Higher is better (accuracy-like scores)
    Maximize,
}

impl MetricGoal {
    const MAXIMIZED: [&'static str; 5] = ["acc", "auc", "precision", "recall", "f1"];

    /// Guess the goal from a metric name.
    pub fn for_metric(name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        if Self::MAXIMIZED.iter().any(|m| name.contains(m)) {
            Self::Maximize
        } else {
            Self::Minimize
        }
    }

    /// Check if lower values are better
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::Minimize)
    }

    /// Best finite value of a series.
    pub fn best(&self, values: &[f32]) -> Option<f32> {
        let finite = values.iter().copied().filter(|v| v.is_finite());
        match self {
            Self::Minimize => finite.reduce(f32::min),
            Self::Maximize => finite.reduce(f32::max),
        }
    }
}
