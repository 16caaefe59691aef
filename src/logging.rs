//! Console output gated by an explicit log level.
//!
//! The host application picks the level; nothing here touches global state.

use std::io::Write;

use serde::{Deserialize, Serialize};

/// Log level for console output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    #[default]
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Check whether a message at `required` level would be printed.
    pub fn permits(self, required: LogLevel) -> bool {
        self != LogLevel::Quiet && (self == required || required == LogLevel::Normal)
    }

    /// Verbosity flag handed to the host model's evaluate call.
    pub fn evaluate_verbosity(self) -> u8 {
        match self {
            LogLevel::Quiet => 0,
            LogLevel::Normal | LogLevel::Verbose => 1,
        }
    }
}

/// Log a message to `out` if the current level permits it.
///
/// Console output is best-effort: a failed write is dropped.
pub fn log(out: &mut dyn Write, level: LogLevel, required: LogLevel, msg: &str) {
    if level.permits(required) {
        let _ = writeln!(out, "{msg}");
    }
}
