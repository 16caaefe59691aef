//! Configuration validation
//!
//! Rejects plotter configurations that cannot drive a training run.

mod validator;

#[cfg(test)]
mod proptests;

pub use validator::validate_config;
