// ============================================================================
// Report Writers
// Text and JSON-lines renderings of processing events
// ============================================================================

use crate::interfaces::{ReportEvent, ReportHandler};
use parking_lot::Mutex;
use std::io::{self, Write};

type SharedWriter = Mutex<Box<dyn Write + Send>>;

fn write_line(target: &SharedWriter, line: &str) {
    let mut w = target.lock();
    if let Err(e) = writeln!(w, "{}", line).and_then(|_| w.flush()) {
        tracing::warn!(error = %e, "failed to write report line");
    }
}

/// Render an event as human-readable text.
///
/// Returns the line and whether it belongs on the diagnostic stream.
pub fn render_text(event: &ReportEvent) -> (String, bool) {
    match event {
        ReportEvent::FileStarted { path } => (format!("Processing file: {}", path), false),
        ReportEvent::OpenFailed { path, .. } => {
            (format!("Error: Could not open file {}", path), true)
        },
        ReportEvent::Processing { line, .. } => (format!("Processing: {}", line), false),
        ReportEvent::Valid { line, .. } => (format!("Valid double: {}", line), false),
        ReportEvent::Invalid { line, .. } => (format!("Invalid double: {}", line), false),
        ReportEvent::Sum { addend, sum, .. } => (format!("Sum with {}: {}", addend, sum), false),
        ReportEvent::LineDone { .. } => (String::new(), false),
    }
}

// ============================================================================
// Console
// ============================================================================

/// Writes text reports, diagnostics going to a separate stream.
pub struct ConsoleReporter {
    out: SharedWriter,
    err: SharedWriter,
}

impl ConsoleReporter {
    pub fn new(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// Report to stdout, diagnostics to stderr.
    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }
}

impl ReportHandler for ConsoleReporter {
    fn on_event(&self, event: ReportEvent) {
        let (line, diagnostic) = render_text(&event);
        if diagnostic {
            write_line(&self.err, &line);
        } else {
            write_line(&self.out, &line);
        }
    }
}

// ============================================================================
// JSON Lines
// ============================================================================

/// Writes each event as one JSON object per line.
///
/// Diagnostic events are also written as text to the diagnostic stream, so
/// an unopenable file is visible without parsing the JSON.
#[cfg(feature = "serde")]
pub struct JsonLinesReporter {
    out: SharedWriter,
    err: SharedWriter,
}

#[cfg(feature = "serde")]
impl JsonLinesReporter {
    pub fn new(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    /// JSON to stdout, diagnostics to stderr.
    pub fn stdio() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }
}

#[cfg(feature = "serde")]
impl ReportHandler for JsonLinesReporter {
    fn on_event(&self, event: ReportEvent) {
        let (line, diagnostic) = render_text(&event);
        if diagnostic {
            write_line(&self.err, &line);
        }

        match serde_json::to_string(&event) {
            Ok(json) => write_line(&self.out, &json),
            Err(e) => tracing::warn!(error = %e, "failed to serialize report event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Writer that appends into a shared buffer.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_text() {
        let (line, diag) = render_text(&ReportEvent::Invalid {
            line_number: 1,
            line: "1.2.3".to_string(),
        });
        assert_eq!(line, "Invalid double: 1.2.3");
        assert!(!diag);

        let (line, diag) = render_text(&ReportEvent::OpenFailed {
            path: "in.txt".to_string(),
            reason: "not found".to_string(),
        });
        assert_eq!(line, "Error: Could not open file in.txt");
        assert!(diag);
    }

    #[test]
    fn test_console_reporter_streams() {
        let out = Capture::default();
        let err = Capture::default();
        let reporter = ConsoleReporter::new(Box::new(out.clone()), Box::new(err.clone()));

        reporter.on_events(vec![
            ReportEvent::Processing {
                line_number: 1,
                line: "1".to_string(),
            },
            ReportEvent::Valid {
                line_number: 1,
                line: "1".to_string(),
            },
            ReportEvent::Sum {
                line_number: 1,
                addend: "-123.456".to_string(),
                sum: "-122.456".to_string(),
            },
            ReportEvent::LineDone { line_number: 1 },
            ReportEvent::OpenFailed {
                path: "x".to_string(),
                reason: "gone".to_string(),
            },
        ]);

        assert_eq!(
            out.contents(),
            "Processing: 1\nValid double: 1\nSum with -123.456: -122.456\n\n"
        );
        assert_eq!(err.contents(), "Error: Could not open file x\n");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_lines_reporter() {
        let out = Capture::default();
        let err = Capture::default();
        let reporter = JsonLinesReporter::new(Box::new(out.clone()), Box::new(err.clone()));

        reporter.on_event(ReportEvent::Invalid {
            line_number: 2,
            line: "x".to_string(),
        });
        reporter.on_event(ReportEvent::LineDone { line_number: 2 });

        assert_eq!(
            out.contents(),
            "{\"event\":\"invalid\",\"line_number\":2,\"line\":\"x\"}\n\
             {\"event\":\"line_done\",\"line_number\":2}\n"
        );
        assert_eq!(err.contents(), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_lines_open_failure_on_both_streams() {
        let out = Capture::default();
        let err = Capture::default();
        let reporter = JsonLinesReporter::new(Box::new(out.clone()), Box::new(err.clone()));

        reporter.on_event(ReportEvent::OpenFailed {
            path: "gone.txt".to_string(),
            reason: "not found".to_string(),
        });

        assert_eq!(err.contents(), "Error: Could not open file gone.txt\n");
        assert_eq!(
            out.contents(),
            "{\"event\":\"open_failed\",\"path\":\"gone.txt\",\"reason\":\"not found\"}\n"
        );
    }
}
