//! Live metric plotting for training loops.
//!
//! `metrics-plotter` provides a training-loop callback that:
//! - evaluates the host model on a validation source every N batches
//! - keeps per-metric training and validation history for the run
//! - prints validation meters with trend and sparkline
//! - redraws per-metric terminal charts every M batches
//!
//! The host trainer drives everything through [`train::callback::TrainerCallback`]
//! and exposes its model through [`train::HostModel`].

pub mod config;
pub mod error;
pub mod logging;
pub mod train;

pub use config::{load_config, ChartConfig, PlotterConfig};
pub use error::{PlotterError, Result};
pub use logging::LogLevel;
pub use train::callback::{
    BatchLogs, BatchSequence, CallbackAction, CallbackContext, CallbackManager, MetricHistory,
    MetricsPlotter, TrainerCallback, ValidationSource,
};
pub use train::meter::MetricMeterBuilder;
pub use train::tui::{Figure, NullSurface, PlotSurface, TerminalMode, TerminalSurface};
pub use train::HostModel;
