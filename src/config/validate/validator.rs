//! Configuration validation logic

use std::collections::HashSet;

use crate::config::schema::PlotterConfig;
use crate::error::{PlotterError, Result};

/// Validate a plotter configuration
///
/// Checks:
/// - Intervals are non-zero and evaluation is rarer than redraws
/// - Batch sizes are non-zero
/// - The metric list is non-empty and free of duplicates
/// - An enabled chart is at least 1 wide and 2 tall
pub fn validate_config(config: &PlotterConfig) -> Result<()> {
    if config.plot_interval == 0 {
        return Err(PlotterError::InvalidInterval {
            field: "plot_interval",
            value: config.plot_interval,
        });
    }

    if config.evaluate_interval <= config.plot_interval {
        return Err(PlotterError::IntervalOrder {
            plot_interval: config.plot_interval,
            evaluate_interval: config.evaluate_interval,
        });
    }

    if config.batch_size == 0 {
        return Err(PlotterError::InvalidBatchSize {
            field: "batch_size",
            value: config.batch_size,
        });
    }

    if config.val_batch_size == Some(0) {
        return Err(PlotterError::InvalidBatchSize {
            field: "val_batch_size",
            value: 0,
        });
    }

    if config.metrics_names.is_empty() {
        return Err(PlotterError::EmptyMetrics);
    }

    let mut seen = HashSet::with_capacity(config.metrics_names.len());
    for name in &config.metrics_names {
        if !seen.insert(name.as_str()) {
            return Err(PlotterError::DuplicateMetric(name.clone()));
        }
    }

    let chart = &config.chart;
    // The encoder draws height / 2 text rows
    if chart.enabled && (chart.width == 0 || chart.height < 2) {
        return Err(PlotterError::InvalidChartSize {
            width: chart.width,
            height: chart.height,
        });
    }

    Ok(())
}
