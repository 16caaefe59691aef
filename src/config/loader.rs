//! YAML configuration loading

use std::fs;
use std::path::Path;

use super::schema::PlotterConfig;
use super::validate::validate_config;
use crate::error::{PlotterError, Result};

/// Load and validate a plotter configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<PlotterConfig> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        PlotterError::ConfigRead {
            path: config_path.as_ref().to_path_buf(),
            source: e,
        }
    })?;

    from_yaml_str(&yaml_content)
}

/// Parse and validate a plotter configuration from YAML text
pub fn from_yaml_str(yaml: &str) -> Result<PlotterConfig> {
    let config: PlotterConfig = serde_yaml::from_str(yaml)
        .map_err(|e| PlotterError::ConfigParse { message: e.to_string() })?;

    validate_config(&config)?;

    Ok(config)
}
