//! Callback system for training events
//!
//! The host trainer drives callbacks through a fixed lifecycle:
//! - `on_train_begin` once
//! - `on_batch_end` after every batch
//! - `on_train_end` once
//!
//! # Example
//!
//! ```rust
//! use metrics_plotter::train::callback::{CallbackAction, CallbackContext, TrainerCallback};
//! use metrics_plotter::Result;
//!
//! struct PrintCallback;
//!
//! impl<M> TrainerCallback<M> for PrintCallback {
//!     fn on_batch_end(
//!         &mut self,
//!         _model: &mut M,
//!         ctx: &CallbackContext,
//!     ) -> Result<CallbackAction> {
//!         if let Some(loss) = ctx.logs.get("loss") {
//!             println!("Batch {} loss {:.4}", ctx.batch, loss);
//!         }
//!         Ok(CallbackAction::Continue)
//!     }
//! }
//! ```

mod manager;
mod plotter;
mod traits;

pub use manager::CallbackManager;
pub use plotter::{BatchSequence, MetricHistory, MetricTrack, MetricsPlotter, ValidationSource};
pub use traits::{BatchLogs, CallbackAction, CallbackContext, TrainerCallback};
