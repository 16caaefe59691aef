//! `MetricsPlotter`: periodic validation plus live metric charts.

use std::io::Write;
use std::marker::PhantomData;

use super::history::MetricHistory;
use super::validation::{next_cursor, ValidationSource};
use crate::config::{validate_config, PlotterConfig};
use crate::error::{PlotterError, Result};
use crate::logging::{log, LogLevel};
use crate::train::callback::{BatchLogs, CallbackAction, CallbackContext, TrainerCallback};
use crate::train::meter::MetricMeterBuilder;
use crate::train::tui::{Figure, NullSurface, PlotSurface, TerminalSurface};
use crate::train::HostModel;

/// Callback that evaluates on a validation set every `evaluate_interval`
/// batches and redraws per-metric charts every `plot_interval` batches.
///
/// All state lives for one training run and is reset by `on_train_begin`.
pub struct MetricsPlotter<M: HostModel> {
    plot_interval: usize,
    evaluate_interval: usize,
    batch_size: usize,
    val_batch_size: usize,
    metrics_names: Vec<String>,
    validation: Option<ValidationSource<M::Features, M::Labels>>,
    history: MetricHistory,
    /// Evaluations performed so far
    step: usize,
    /// Round-robin index into the validation batches
    val_batch_index: usize,
    last_meters: Vec<String>,
    sparkline_width: usize,
    log_level: LogLevel,
    /// Sink for progress and meter lines
    console: Box<dyn Write>,
    surface: Box<dyn PlotSurface>,
    _model: PhantomData<fn(&mut M)>,
}

impl<M: HostModel> MetricsPlotter<M> {
    /// Create a plotter, validating the configuration.
    ///
    /// Fails with [`PlotterError::IntervalOrder`] when
    /// `evaluate_interval <= plot_interval`.
    pub fn new(
        config: PlotterConfig,
        validation: Option<ValidationSource<M::Features, M::Labels>>,
    ) -> Result<Self> {
        validate_config(&config)?;

        if validation.as_ref().is_some_and(ValidationSource::is_empty) {
            return Err(PlotterError::EmptyValidationSource);
        }

        let surface: Box<dyn PlotSurface> = if config.chart.enabled {
            Box::new(
                TerminalSurface::stdout(config.chart.width, config.chart.height)
                    .terminal_mode(config.chart.resolve_mode()),
            )
        } else {
            Box::new(NullSurface)
        };

        Ok(Self {
            plot_interval: config.plot_interval,
            evaluate_interval: config.evaluate_interval,
            batch_size: config.batch_size,
            val_batch_size: config.effective_val_batch_size(),
            history: MetricHistory::new(&config.metrics_names),
            metrics_names: config.metrics_names,
            validation,
            step: 0,
            val_batch_index: 0,
            last_meters: Vec::new(),
            sparkline_width: config.chart.sparkline_width,
            log_level: config.log_level,
            console: Box::new(std::io::stdout()),
            surface,
            _model: PhantomData,
        })
    }

    /// Replace the chart surface.
    pub fn with_surface(mut self, surface: impl PlotSurface + 'static) -> Self {
        self.surface = Box::new(surface);
        self
    }

    /// Replace the console sink (stdout by default).
    pub fn with_console(mut self, console: impl Write + 'static) -> Self {
        self.console = Box::new(console);
        self
    }

    /// Set console verbosity.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Batches between chart redraws
    pub fn plot_interval(&self) -> usize {
        self.plot_interval
    }

    /// Batches between validation evaluations
    pub fn evaluate_interval(&self) -> usize {
        self.evaluate_interval
    }

    /// Training batch size
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Batch size handed to the model's evaluate call
    pub fn val_batch_size(&self) -> usize {
        self.val_batch_size
    }

    /// Tracked metrics, in configured order
    pub fn metrics_names(&self) -> &[String] {
        &self.metrics_names
    }

    /// Number of evaluations performed in this run
    pub fn step(&self) -> usize {
        self.step
    }

    /// Current validation cursor
    pub fn validation_cursor(&self) -> usize {
        self.val_batch_index
    }

    /// Accumulated history
    pub fn history(&self) -> &MetricHistory {
        &self.history
    }

    /// Meter lines built at the most recent evaluation
    pub fn last_meters(&self) -> &[String] {
        &self.last_meters
    }

    /// Check if a validation source is configured
    pub fn has_validation_set(&self) -> bool {
        self.validation.is_some()
    }

    /// Number of validation batches (0 without a source)
    pub fn validation_data_len(&self) -> usize {
        self.validation.as_ref().map_or(0, ValidationSource::len)
    }

    fn reset(&mut self) {
        self.step = 0;
        self.val_batch_index = 0;
        self.last_meters.clear();
        self.history.reset();
    }

    /// Score the model on the batch under the cursor.
    fn evaluate(&mut self, model: &mut M) -> Result<Vec<f32>> {
        let Some(source) = &self.validation else {
            return Ok(Vec::new());
        };

        let (features, labels) = source.batch(self.val_batch_index).ok_or_else(|| {
            PlotterError::evaluation(format!(
                "validation batch {} out of range ({} batches)",
                self.val_batch_index,
                source.len()
            ))
        })?;

        log(
            self.console.as_mut(),
            self.log_level,
            LogLevel::Normal,
            &format!(
                "\n\nEvaluate model every {} batches (batch size: {}):",
                self.evaluate_interval, self.val_batch_size
            ),
        );

        model.evaluate(features, labels, self.val_batch_size, self.log_level.evaluate_verbosity())
    }

    /// Append this step's training and validation values and build meters.
    fn build_metric_meters(&mut self, logs: &BatchLogs, score: &[f32]) -> Vec<String> {
        let with_validation = self.has_validation_set();

        for (index, metric) in self.metrics_names.iter().enumerate() {
            let value = logs.get(metric).unwrap_or_else(|| {
                log(
                    self.console.as_mut(),
                    self.log_level,
                    LogLevel::Verbose,
                    &format!("Metric '{metric}' missing from batch logs, recording NaN"),
                );
                f32::NAN
            });
            self.history.push_train(index, value);

            if with_validation {
                self.history.push_validation(index, score[index]);
            }
        }

        if !with_validation {
            return Vec::new();
        }

        let builder = MetricMeterBuilder::new(&self.history).sparkline_width(self.sparkline_width);
        self.metrics_names.iter().map(|metric| builder.build(metric)).collect()
    }

    fn print_meters(&mut self, meters: &[String]) {
        let out = self.console.as_mut();
        log(out, self.log_level, LogLevel::Normal, "\nVal metrics:");
        for line in meters {
            log(out, self.log_level, LogLevel::Normal, &format!("  - {line}"));
        }
    }

    fn update_metric_graphs(&mut self) -> Result<()> {
        match Figure::from_history(&self.history, self.has_validation_set()) {
            Some(figure) => self.surface.present(&figure),
            None => Ok(()),
        }
    }

    fn update_batch_index(&mut self) {
        self.val_batch_index =
            next_cursor(self.val_batch_index, self.validation.as_ref().map(ValidationSource::len));
    }
}

impl<M: HostModel> TrainerCallback<M> for MetricsPlotter<M> {
    fn on_train_begin(&mut self, model: &mut M, _ctx: &CallbackContext) -> Result<CallbackAction> {
        self.reset();

        if self.has_validation_set() {
            let model_names = model.metrics_names();
            if model_names != self.metrics_names {
                return Err(PlotterError::MetricNamesMismatch {
                    configured: self.metrics_names.clone(),
                    model: model_names,
                });
            }
        }

        for metric in &self.metrics_names {
            log(self.console.as_mut(), self.log_level, LogLevel::Normal, metric);
        }

        Ok(CallbackAction::Continue)
    }

    fn on_batch_end(&mut self, model: &mut M, ctx: &CallbackContext) -> Result<CallbackAction> {
        let batch = ctx.batch;

        if batch.is_multiple_of(self.plot_interval) && self.history.evaluations() > 1 {
            self.update_metric_graphs()?;
        }

        if batch.is_multiple_of(self.evaluate_interval) {
            let score = self.evaluate(model)?;
            if self.has_validation_set() && score.len() != self.metrics_names.len() {
                return Err(PlotterError::ScoreCountMismatch {
                    expected: self.metrics_names.len(),
                    actual: score.len(),
                });
            }

            self.step += 1;
            self.history.record_step(self.step, ctx.logs.clone());

            let meters = self.build_metric_meters(&ctx.logs, &score);
            if self.has_validation_set() && self.step > 1 {
                self.print_meters(&meters);
                log(
                    self.console.as_mut(),
                    self.log_level,
                    LogLevel::Normal,
                    "\nContinue model train:",
                );
            }
            self.last_meters = meters;
        }

        self.update_batch_index();

        Ok(CallbackAction::Continue)
    }

    fn name(&self) -> &'static str {
        "MetricsPlotter"
    }
}
