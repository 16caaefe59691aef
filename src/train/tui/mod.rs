//! Live terminal charts
//!
//! Terminal-based metric charts using trueno-viz.
//!
//! # Features
//!
//! - `Figure`: one subplot per tracked metric over the evaluation-step axis
//! - `PlotSurface`: where a figure is presented
//! - `TerminalSurface`: in-place terminal redraw
//! - `TerminalMode`: ASCII / Unicode / ANSI output selection

mod capability;
mod figure;
mod surface;

pub use capability::{TerminalCapabilities, TerminalMode};
pub use figure::{Figure, Line, Subplot};
pub use surface::{NullSurface, PlotSurface, TerminalSurface};
