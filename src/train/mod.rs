//! Training-loop integration
//!
//! This module provides the pieces the host trainer interacts with:
//! - Callback observer interface and dispatcher
//! - `MetricsPlotter`, the evaluation and live-chart callback
//! - Host model contract used for validation evaluation
//! - Validation meter formatting
//! - Terminal chart surfaces
//!
//! # Example
//!
//! ```no_run
//! use metrics_plotter::train::callback::{
//!     BatchLogs, CallbackContext, MetricsPlotter, TrainerCallback,
//! };
//! use metrics_plotter::train::HostModel;
//! use metrics_plotter::{PlotterConfig, Result};
//!
//! struct Model;
//!
//! impl HostModel for Model {
//!     type Features = Vec<f32>;
//!     type Labels = Vec<f32>;
//!
//!     fn evaluate(
//!         &mut self,
//!         _x: &Vec<f32>,
//!         _y: &Vec<f32>,
//!         _batch_size: usize,
//!         _verbose: u8,
//!     ) -> Result<Vec<f32>> {
//!         Ok(vec![0.3])
//!     }
//!
//!     fn metrics_names(&self) -> Vec<String> {
//!         vec!["loss".to_string()]
//!     }
//! }
//!
//! let mut model = Model;
//! let mut plotter = MetricsPlotter::<Model>::new(PlotterConfig::default(), None)?;
//! plotter.on_train_begin(&mut model, &CallbackContext::default())?;
//! for batch in 0..200 {
//!     let ctx = CallbackContext::for_batch(batch, BatchLogs::from([("loss", 0.5)]));
//!     plotter.on_batch_end(&mut model, &ctx)?;
//! }
//! # Ok::<(), metrics_plotter::PlotterError>(())
//! ```

pub mod callback;
pub mod meter;
mod model;
pub mod tui;

pub use model::HostModel;
