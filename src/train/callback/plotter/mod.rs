//! Metrics plotter callback
//!
//! Evaluates the host model on validation batches at a fixed batch interval,
//! accumulates per-metric series and redraws charts in place.

mod history;
mod metrics_plotter;
mod validation;

#[cfg(test)]
mod proptests;

pub use history::{MetricHistory, MetricTrack};
pub use metrics_plotter::MetricsPlotter;
pub use validation::{BatchSequence, ValidationSource};
