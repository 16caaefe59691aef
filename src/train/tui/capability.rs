//! Terminal capability detection for chart rendering.

use std::env;
use std::io::{stdout, IsTerminal};

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// ASCII only (widest compatibility)
    Ascii,
    /// Unicode half blocks (modern terminals)
    #[default]
    Unicode,
    /// ANSI true color
    Ansi,
}

impl TerminalMode {
    /// Pick a mode for the current stdout.
    pub fn detect() -> Self {
        TerminalCapabilities::detect().recommended_mode()
    }
}

/// What the attached terminal can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Supports Unicode characters
    pub unicode: bool,
    /// Supports 24-bit true color
    pub true_color: bool,
    /// Is interactive TTY
    pub is_tty: bool,
}

impl Default for TerminalCapabilities {
    fn default() -> Self {
        Self {
            unicode: true,
            true_color: false,
            is_tty: true,
        }
    }
}

impl TerminalCapabilities {
    /// Detect capabilities from the environment.
    pub fn detect() -> Self {
        let lang = env::var("LANG").unwrap_or_default();
        let term = env::var("TERM").unwrap_or_default();
        let colorterm = env::var("COLORTERM").unwrap_or_default();

        Self {
            unicode: lang.contains("UTF") || lang.contains("utf"),
            true_color: term != "dumb" && (colorterm == "truecolor" || colorterm == "24bit"),
            is_tty: stdout().is_terminal(),
        }
    }

    /// Get recommended terminal mode based on capabilities.
    pub fn recommended_mode(&self) -> TerminalMode {
        if !self.is_tty {
            TerminalMode::Ascii
        } else if self.true_color {
            TerminalMode::Ansi
        } else if self.unicode {
            TerminalMode::Unicode
        } else {
            TerminalMode::Ascii
        }
    }
}
