// src/strategy/observer.rs

use std::fmt::Debug;
use tracing::info;

/// Receives the intermediate values of an order-quantity calculation.
///
/// Observers only watch: nothing they do can change the computed result.
pub trait CalculationObserver: Debug {
    /// A calculation for `model` is starting.
    fn begin(&mut self, model: &'static str);

    /// A named intermediate value.
    fn record(&mut self, label: &'static str, value: f64);

    /// Free-form progress note (tier changes, selection decisions).
    fn note(&mut self, message: &str);
}

/// Discards everything. Used when `verbose` is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl CalculationObserver for SilentObserver {
    fn begin(&mut self, _model: &'static str) {}

    fn record(&mut self, _label: &'static str, _value: f64) {}

    fn note(&mut self, _message: &str) {}
}

/// Forwards the trace to `tracing` at info level.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver {
    model: &'static str,
}

impl CalculationObserver for TracingObserver {
    fn begin(&mut self, model: &'static str) {
        self.model = model;
        info!(model, "--- order quantity analysis ---");
    }

    fn record(&mut self, label: &'static str, value: f64) {
        info!(model = self.model, label, value);
    }

    fn note(&mut self, message: &str) {
        info!(model = self.model, "{}", message);
    }
}

/// One recorded trace entry.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEntry {
    Begin(&'static str),
    Value(&'static str, f64),
    Note(String),
}

/// Keeps the trace in memory, e.g. for a report or a test.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub entries: Vec<TraceEntry>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All values recorded under `label`, in order.
    pub fn values(&self, label: &str) -> Vec<f64> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                TraceEntry::Value(l, v) if *l == label => Some(*v),
                _ => None,
            })
            .collect()
    }
}

impl CalculationObserver for RecordingObserver {
    fn begin(&mut self, model: &'static str) {
        self.entries.push(TraceEntry::Begin(model));
    }

    fn record(&mut self, label: &'static str, value: f64) {
        self.entries.push(TraceEntry::Value(label, value));
    }

    fn note(&mut self, message: &str) {
        self.entries.push(TraceEntry::Note(message.to_string()));
    }
}
