//! Error types with actionable diagnostics.
//!
//! Configuration problems are reported at construction time. Evaluation and
//! rendering problems surface from the lifecycle hooks as `Err` values.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for plotter operations.
pub type Result<T> = std::result::Result<T, PlotterError>;

/// Errors raised by the metrics plotter and its collaborators.
#[derive(Error, Debug)]
pub enum PlotterError {
    /// Evaluation must happen less often than redraws.
    #[error("Evaluation interval {evaluate_interval} must be greater than plot interval {plot_interval}\n  → Increase evaluate_interval or decrease plot_interval")]
    IntervalOrder {
        plot_interval: usize,
        evaluate_interval: usize,
    },

    /// A batch interval of zero.
    #[error("Invalid {field}: {value} (must be > 0)")]
    InvalidInterval { field: &'static str, value: usize },

    /// Chart dimensions the terminal encoder cannot rasterize.
    #[error("Invalid chart size {width}x{height} (width must be > 0, height >= 2)\n  → Fix chart.width / chart.height or set chart.enabled: false")]
    InvalidChartSize { width: u32, height: u32 },

    /// A batch size of zero.
    #[error("Invalid {field}: {value} (must be > 0)")]
    InvalidBatchSize { field: &'static str, value: usize },

    /// No metrics to track.
    #[error("Tracked metric list cannot be empty\n  → Add at least one metric name, e.g. \"loss\"")]
    EmptyMetrics,

    /// The same metric was listed twice.
    #[error("Metric '{0}' is listed more than once")]
    DuplicateMetric(String),

    /// A batch sequence without batches.
    #[error("Validation batch sequence is empty\n  → Provide at least one (features, labels) batch or omit the validation source")]
    EmptyValidationSource,

    /// Host model reports metrics in a different order or membership.
    #[error("Configured metrics {configured:?} do not match model metrics {model:?}\n  → Evaluation scores are matched by position; list the model's metrics in the same order")]
    MetricNamesMismatch {
        configured: Vec<String>,
        model: Vec<String>,
    },

    /// Evaluation returned the wrong number of scores.
    #[error("Evaluation returned {actual} scores for {expected} tracked metrics")]
    ScoreCountMismatch { expected: usize, actual: usize },

    /// Host model failed to evaluate.
    #[error("Model evaluation failed: {message}")]
    Evaluation { message: String },

    /// Chart rendering failed.
    #[error("Chart render failed: {message}")]
    Render { message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file has invalid syntax.
    #[error("Failed to parse YAML config: {message}")]
    ConfigParse { message: String },
}

impl PlotterError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an evaluation error.
    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::Evaluation { message: message.into() }
    }

    /// Create a render error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render { message: message.into() }
    }

    /// Check if this error comes from an invalid configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::IntervalOrder { .. }
                | Self::InvalidInterval { .. }
                | Self::InvalidBatchSize { .. }
                | Self::InvalidChartSize { .. }
                | Self::EmptyMetrics
                | Self::DuplicateMetric(_)
                | Self::EmptyValidationSource
                | Self::ConfigRead { .. }
                | Self::ConfigParse { .. }
        )
    }
}
