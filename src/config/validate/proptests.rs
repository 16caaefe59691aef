//! Property-based tests for configuration validation

use super::validator::validate_config;
use crate::config::schema::PlotterConfig;
use crate::error::PlotterError;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_evaluate_not_above_plot_fails(plot in 1usize..1000, below in 0usize..1000) {
        let evaluate = plot.saturating_sub(below % (plot + 1));
        let config = PlotterConfig::default().intervals(plot, evaluate);
        let rejected = matches!(
            validate_config(&config),
            Err(PlotterError::IntervalOrder { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_evaluate_above_plot_passes(plot in 1usize..1000, gap in 1usize..1000) {
        let config = PlotterConfig::default().intervals(plot, plot + gap);
        prop_assert!(validate_config(&config).is_ok());
    }
}
