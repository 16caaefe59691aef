//! Plotter configuration schema
//!
//! Declarative configuration for the metrics plotter, loadable from YAML.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::train::tui::TerminalMode;

/// Metrics plotter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotterConfig {
    /// Metrics to track, in the order the host model reports them
    #[serde(default = "default_metrics_names")]
    pub metrics_names: Vec<String>,
    /// Batches between chart redraws
    #[serde(default = "default_plot_interval")]
    pub plot_interval: usize,
    /// Batches between validation evaluations
    #[serde(default = "default_evaluate_interval")]
    pub evaluate_interval: usize,
    /// Training batch size
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Validation batch size (defaults to `batch_size`)
    #[serde(default)]
    pub val_batch_size: Option<usize>,
    /// Console verbosity
    #[serde(default)]
    pub log_level: LogLevel,
    /// Chart output
    #[serde(default)]
    pub chart: ChartConfig,
}

/// Chart output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Draw charts at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Chart width in pixels of the rasterized curve
    #[serde(default = "default_width")]
    pub width: u32,
    /// Chart height in pixels of the rasterized curve
    #[serde(default = "default_height")]
    pub height: u32,
    /// Terminal mode (ascii, unicode, ansi, auto)
    #[serde(default = "default_terminal_mode")]
    pub terminal_mode: String,
    /// Sparkline width used in validation meters
    #[serde(default = "default_sparkline_width")]
    pub sparkline_width: usize,
}

fn default_metrics_names() -> Vec<String> {
    vec!["loss".to_string()]
}
fn default_plot_interval() -> usize {
    10
}
fn default_evaluate_interval() -> usize {
    50
}
fn default_batch_size() -> usize {
    32
}
fn default_true() -> bool {
    true
}
fn default_width() -> u32 {
    80
}
fn default_height() -> u32 {
    20
}
fn default_terminal_mode() -> String {
    "auto".to_string()
}
fn default_sparkline_width() -> usize {
    20
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            metrics_names: default_metrics_names(),
            plot_interval: default_plot_interval(),
            evaluate_interval: default_evaluate_interval(),
            batch_size: default_batch_size(),
            val_batch_size: None,
            log_level: LogLevel::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: default_width(),
            height: default_height(),
            terminal_mode: default_terminal_mode(),
            sparkline_width: default_sparkline_width(),
        }
    }
}

impl PlotterConfig {
    /// Create a config tracking the given metrics with default intervals.
    pub fn new<S: Into<String>>(metrics_names: impl IntoIterator<Item = S>) -> Self {
        Self {
            metrics_names: metrics_names.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set redraw and evaluation intervals.
    pub fn intervals(mut self, plot_interval: usize, evaluate_interval: usize) -> Self {
        self.plot_interval = plot_interval;
        self.evaluate_interval = evaluate_interval;
        self
    }

    /// Set training and validation batch sizes.
    pub fn batch_sizes(mut self, batch_size: usize, val_batch_size: Option<usize>) -> Self {
        self.batch_size = batch_size;
        self.val_batch_size = val_batch_size;
        self
    }

    /// Set console verbosity.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Validation batch size, falling back to the training batch size.
    pub fn effective_val_batch_size(&self) -> usize {
        self.val_batch_size.unwrap_or(self.batch_size)
    }
}

impl ChartConfig {
    /// Resolve the configured terminal mode, detecting it when unset.
    pub fn resolve_mode(&self) -> TerminalMode {
        match self.terminal_mode.as_str() {
            "ascii" => TerminalMode::Ascii,
            "ansi" => TerminalMode::Ansi,
            "unicode" => TerminalMode::Unicode,
            _ => TerminalMode::detect(),
        }
    }
}
