//! Property tests for MetricsPlotter bookkeeping.

use proptest::prelude::*;

use super::validation::next_cursor;
use super::{MetricsPlotter, ValidationSource};
use crate::config::PlotterConfig;
use crate::error::Result;
use crate::logging::LogLevel;
use crate::train::callback::{BatchLogs, CallbackContext, TrainerCallback};
use crate::train::tui::NullSurface;
use crate::train::HostModel;

struct ConstantModel;

impl HostModel for ConstantModel {
    type Features = u8;
    type Labels = u8;

    fn evaluate(&mut self, features: &u8, _: &u8, _: usize, _: u8) -> Result<Vec<f32>> {
        Ok(vec![f32::from(*features), 0.5])
    }

    fn metrics_names(&self) -> Vec<String> {
        vec!["loss".to_string(), "accuracy".to_string()]
    }
}

fn build(plot: usize, evaluate: usize, batches: usize) -> MetricsPlotter<ConstantModel> {
    let config = PlotterConfig::new(["loss", "accuracy"])
        .intervals(plot, evaluate)
        .log_level(LogLevel::Quiet);
    let source = (batches > 0).then(|| {
        ValidationSource::batches((0..batches).map(|i| (i as u8, 0u8)).collect::<Vec<_>>())
    });
    MetricsPlotter::new(config, source).unwrap().with_surface(NullSurface)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_series_grow_in_lockstep(
        plot in 1usize..10,
        gap in 1usize..20,
        batches in 0usize..5,
        indices in prop::collection::vec(0usize..500, 0..200),
    ) {
        let evaluate = plot + gap;
        let mut plotter = build(plot, evaluate, batches);
        let mut model = ConstantModel;
        plotter.on_train_begin(&mut model, &CallbackContext::default()).unwrap();

        for &index in &indices {
            let logs = BatchLogs::from([("loss", 1.0), ("accuracy", 0.1)]);
            let ctx = CallbackContext::for_batch(index, logs);
            plotter.on_batch_end(&mut model, &ctx).unwrap();
        }

        let expected = indices.iter().filter(|i| *i % evaluate == 0).count();
        prop_assert_eq!(plotter.step(), expected);
        prop_assert_eq!(plotter.history().steps().len(), expected);
        for track in plotter.history().tracks() {
            prop_assert_eq!(track.train().len(), expected);
            let expected_val = if batches > 0 { expected } else { 0 };
            prop_assert_eq!(track.validation().len(), expected_val);
        }
    }

    #[test]
    fn prop_cursor_stays_in_range(
        batches in 1usize..8,
        calls in 0usize..100,
    ) {
        let mut plotter = build(1, 2, batches);
        let mut model = ConstantModel;
        plotter.on_train_begin(&mut model, &CallbackContext::default()).unwrap();

        for index in 0..calls {
            let ctx = CallbackContext::for_batch(index, BatchLogs::from([("loss", 1.0)]));
            plotter.on_batch_end(&mut model, &ctx).unwrap();
            prop_assert!(plotter.validation_cursor() < batches);
            prop_assert_eq!(plotter.validation_cursor(), (index + 1) % batches);
        }
    }

    #[test]
    fn prop_next_cursor_wraps_exactly_at_end(cursor in 0usize..100, len in 1usize..100) {
        let cursor = cursor % len;
        let next = next_cursor(cursor, Some(len));
        if cursor + 1 == len {
            prop_assert_eq!(next, 0);
        } else {
            prop_assert_eq!(next, cursor + 1);
        }
        prop_assert_eq!(next_cursor(cursor, None), 0);
    }
}
