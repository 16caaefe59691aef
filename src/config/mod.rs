//! Plotter configuration: schema, YAML loading and validation.

mod loader;
mod schema;
mod validate;

pub use loader::{from_yaml_str, load_config};
pub use schema::{ChartConfig, PlotterConfig};
pub use validate::validate_config;
