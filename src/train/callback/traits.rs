//! Core traits and types for the callback system
//!
//! This module provides the foundational types for training callbacks:
//! - `BatchLogs` - Per-batch metric values reported by the trainer
//! - `CallbackContext` - State passed to callbacks
//! - `CallbackAction` - Actions a callback can request
//! - `TrainerCallback` - The trait all callbacks implement

use std::collections::BTreeMap;

use crate::error::Result;

/// Metric values the trainer logged for one batch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchLogs {
    values: BTreeMap<String, f32>,
}

impl BatchLogs {
    /// Create empty logs
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a metric value
    pub fn insert(&mut self, name: impl Into<String>, value: f32) {
        self.values.insert(name.into(), value);
    }

    /// Look up a metric value
    pub fn get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    /// Number of logged metrics
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing was logged
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (name, value) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f32); N]> for BatchLogs {
    fn from(pairs: [(K, f32); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>> FromIterator<(K, f32)> for BatchLogs {
    fn from_iter<I: IntoIterator<Item = (K, f32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Context passed to callbacks with current training state
#[derive(Clone, Debug, Default)]
pub struct CallbackContext {
    /// Current epoch (0-indexed)
    pub epoch: usize,
    /// Batch index within the epoch
    pub batch: usize,
    /// Global batch count
    pub global_step: usize,
    /// Metric values logged for this batch
    pub logs: BatchLogs,
}

impl CallbackContext {
    /// Context for the end of a batch
    pub fn for_batch(batch: usize, logs: BatchLogs) -> Self {
        Self {
            batch,
            global_step: batch,
            logs,
            ..Default::default()
        }
    }
}

/// Action to take after a callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    /// Continue training normally
    Continue,
    /// Stop training
    Stop,
}

/// Trait for training callbacks
///
/// The host trainer invokes `on_train_begin` once, then `on_batch_end` after
/// every batch, then `on_train_end`. All methods have default no-op
/// implementations, so you only need to implement the events you care about.
///
/// `M` is the host model handle; callbacks may ask it to evaluate.
pub trait TrainerCallback<M: ?Sized> {
    /// Called before training starts
    fn on_train_begin(&mut self, _model: &mut M, _ctx: &CallbackContext) -> Result<CallbackAction> {
        Ok(CallbackAction::Continue)
    }

    /// Called after each training batch
    fn on_batch_end(&mut self, _model: &mut M, _ctx: &CallbackContext) -> Result<CallbackAction> {
        Ok(CallbackAction::Continue)
    }

    /// Called after training ends
    fn on_train_end(&mut self, _model: &mut M, _ctx: &CallbackContext) {}

    /// Get callback name for logging
    fn name(&self) -> &'static str {
        "TrainerCallback"
    }
}
