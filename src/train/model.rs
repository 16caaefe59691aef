//! Host model contract
//!
//! The plotter never trains anything itself. It only asks the host model to
//! score a validation batch and to report the order of its metrics.

use crate::error::Result;

/// Model handle exposed by the host trainer.
pub trait HostModel {
    /// Input batch type
    type Features;
    /// Target batch type
    type Labels;

    /// Evaluate on one validation batch.
    ///
    /// Returns the flattened per-metric scores in the same order as
    /// [`HostModel::metrics_names`].
    fn evaluate(
        &mut self,
        features: &Self::Features,
        labels: &Self::Labels,
        batch_size: usize,
        verbose: u8,
    ) -> Result<Vec<f32>>;

    /// Ordered metric names this model reports.
    fn metrics_names(&self) -> Vec<String>;
}
