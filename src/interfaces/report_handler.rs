// ============================================================================
// Report Handler Interface
// Defines the contract for consuming line-processing events
// ============================================================================

use parking_lot::Mutex;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted while processing an input file
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum ReportEvent {
    /// Processing of a file is about to begin
    FileStarted { path: String },

    /// The input file could not be opened
    OpenFailed { path: String, reason: String },

    /// A non-blank line was read (whitespace already stripped)
    Processing { line_number: usize, line: String },

    /// The line is a valid decimal number
    Valid { line_number: usize, line: String },

    /// The line is not a valid decimal number
    Invalid { line_number: usize, line: String },

    /// Sum of a valid line and the configured addend
    Sum {
        line_number: usize,
        addend: String,
        sum: String,
    },

    /// All reporting for a line is finished
    LineDone { line_number: usize },
}

/// Report handler trait for processing events
/// Implementations can print, log, collect, serialize, etc.
pub trait ReportHandler: Send + Sync {
    /// Handle a single event
    fn on_event(&self, event: ReportEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ReportEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op report handler
pub struct NoOpReportHandler;

impl ReportHandler for NoOpReportHandler {
    fn on_event(&self, _event: ReportEvent) {}
}

/// Logging report handler
pub struct LoggingReportHandler;

impl ReportHandler for LoggingReportHandler {
    fn on_event(&self, event: ReportEvent) {
        tracing::debug!("Report event: {:?}", event);
    }
}

/// Collects every event in memory, in arrival order.
#[derive(Default)]
pub struct RecordingHandler {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far.
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<ReportEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl ReportHandler for RecordingHandler {
    fn on_event(&self, event: ReportEvent) {
        self.events.lock().push(event);
    }
}

/// Forwards every event to each inner handler, in order.
pub struct FanOutHandler {
    handlers: Vec<Arc<dyn ReportHandler>>,
}

impl FanOutHandler {
    pub fn new(handlers: Vec<Arc<dyn ReportHandler>>) -> Self {
        Self { handlers }
    }
}

impl ReportHandler for FanOutHandler {
    fn on_event(&self, event: ReportEvent) {
        if let Some((last, rest)) = self.handlers.split_last() {
            for handler in rest {
                handler.on_event(event.clone());
            }
            last.on_event(event);
        }
    }
}
