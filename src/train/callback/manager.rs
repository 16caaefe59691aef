//! Callback manager for dispatching events to multiple callbacks

use super::traits::{CallbackAction, CallbackContext, TrainerCallback};
use crate::error::Result;

/// Manages multiple callbacks and dispatches events
pub struct CallbackManager<M: ?Sized> {
    callbacks: Vec<Box<dyn TrainerCallback<M>>>,
}

impl<M: ?Sized> CallbackManager<M> {
    /// Create new callback manager
    pub fn new() -> Self {
        Self { callbacks: Vec::new() }
    }

    /// Add a callback
    pub fn add<C: TrainerCallback<M> + 'static>(&mut self, callback: C) {
        self.callbacks.push(Box::new(callback));
    }

    /// Check if no callbacks are registered
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Get number of callbacks
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Names of registered callbacks, in dispatch order
    pub fn names(&self) -> Vec<&'static str> {
        self.callbacks.iter().map(|cb| cb.name()).collect()
    }

    /// Fire train begin event
    pub fn on_train_begin(
        &mut self,
        model: &mut M,
        ctx: &CallbackContext,
    ) -> Result<CallbackAction> {
        for cb in &mut self.callbacks {
            if cb.on_train_begin(model, ctx)? == CallbackAction::Stop {
                return Ok(CallbackAction::Stop);
            }
        }
        Ok(CallbackAction::Continue)
    }

    /// Fire batch end event
    pub fn on_batch_end(&mut self, model: &mut M, ctx: &CallbackContext) -> Result<CallbackAction> {
        for cb in &mut self.callbacks {
            if cb.on_batch_end(model, ctx)? == CallbackAction::Stop {
                return Ok(CallbackAction::Stop);
            }
        }
        Ok(CallbackAction::Continue)
    }

    /// Fire train end event
    pub fn on_train_end(&mut self, model: &mut M, ctx: &CallbackContext) {
        for cb in &mut self.callbacks {
            cb.on_train_end(model, ctx);
        }
    }
}

impl<M: ?Sized> Default for CallbackManager<M> {
    fn default() -> Self {
        Self::new()
    }
}
