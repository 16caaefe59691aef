//! Per-metric training and validation history
//!
//! Series are append-only for the lifetime of one training run and are
//! allocated up front from the tracked metric list.

use crate::train::callback::BatchLogs;

/// Training and validation series for one metric.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricTrack {
    name: String,
    train: Vec<f32>,
    validation: Vec<f32>,
}

impl MetricTrack {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Metric name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Training values, one per evaluation step
    pub fn train(&self) -> &[f32] {
        &self.train
    }

    /// Validation values, one per evaluation step when a source is configured
    pub fn validation(&self) -> &[f32] {
        &self.validation
    }
}

/// Accumulated metric history for one training run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricHistory {
    steps: Vec<usize>,
    logs: Vec<BatchLogs>,
    tracks: Vec<MetricTrack>,
}

impl MetricHistory {
    /// Create an empty history with one track per metric.
    pub fn new<S: AsRef<str>>(metrics_names: &[S]) -> Self {
        Self {
            steps: Vec::new(),
            logs: Vec::new(),
            tracks: metrics_names.iter().map(|n| MetricTrack::new(n.as_ref())).collect(),
        }
    }

    /// Drop every recorded value, keeping the tracked metrics.
    pub fn reset(&mut self) {
        self.steps.clear();
        self.logs.clear();
        for track in &mut self.tracks {
            track.train.clear();
            track.validation.clear();
        }
    }

    /// Record an evaluation step and the raw logs that triggered it.
    pub fn record_step(&mut self, step: usize, logs: BatchLogs) {
        self.steps.push(step);
        self.logs.push(logs);
    }

    /// Append a training value to the track at `index`.
    pub(crate) fn push_train(&mut self, index: usize, value: f32) {
        self.tracks[index].train.push(value);
    }

    /// Append a validation value to the track at `index`.
    pub(crate) fn push_validation(&mut self, index: usize, value: f32) {
        self.tracks[index].validation.push(value);
    }

    /// Number of evaluation steps recorded
    pub fn evaluations(&self) -> usize {
        self.steps.len()
    }

    /// Check if no evaluation has been recorded
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Shared x-axis: step index of every evaluation
    pub fn steps(&self) -> &[usize] {
        &self.steps
    }

    /// Raw logs captured at every evaluation
    pub fn logs(&self) -> &[BatchLogs] {
        &self.logs
    }

    /// All tracks, in configured metric order
    pub fn tracks(&self) -> &[MetricTrack] {
        &self.tracks
    }

    /// Find the track for a metric
    pub fn track(&self, name: &str) -> Option<&MetricTrack> {
        self.tracks.iter().find(|t| t.name == name)
    }

    /// Training series for a metric
    pub fn train(&self, name: &str) -> Option<&[f32]> {
        self.track(name).map(MetricTrack::train)
    }

    /// Validation series for a metric
    pub fn validation(&self, name: &str) -> Option<&[f32]> {
        self.track(name).map(MetricTrack::validation)
    }
}
