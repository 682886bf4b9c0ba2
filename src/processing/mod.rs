// ============================================================================
// Processing Module
// Line-oriented checking of decimal numbers read from text input
// ============================================================================

mod config;
mod errors;
mod processor;
mod reporters;

pub use config::{ProcessorConfig, ReportFormat, DEFAULT_ADDEND};
pub use errors::{ProcessError, ProcessResult};
pub use processor::{strip_whitespace, LineOutcome, LineProcessor, ProcessSummary};
pub use reporters::{render_text, ConsoleReporter};

#[cfg(feature = "serde")]
pub use reporters::JsonLinesReporter;

use crate::interfaces::{FanOutHandler, LoggingReportHandler, ReportHandler};
use std::sync::Arc;

/// Report handler writing to the standard streams in the given format.
///
/// With `verbose`, every event is also logged at debug level.
pub fn stdio_handler(format: ReportFormat, verbose: bool) -> Arc<dyn ReportHandler> {
    with_logging(format_handler(format), verbose)
}

/// Wrap `handler` so events are also logged when `verbose` is set.
pub fn with_logging(handler: Arc<dyn ReportHandler>, verbose: bool) -> Arc<dyn ReportHandler> {
    if verbose {
        Arc::new(FanOutHandler::new(vec![
            handler,
            Arc::new(LoggingReportHandler) as Arc<dyn ReportHandler>,
        ]))
    } else {
        handler
    }
}

fn format_handler(format: ReportFormat) -> Arc<dyn ReportHandler> {
    match format {
        ReportFormat::Text => Arc::new(ConsoleReporter::stdio()),
        #[cfg(feature = "serde")]
        ReportFormat::JsonLines => Arc::new(JsonLinesReporter::stdio()),
        #[cfg(not(feature = "serde"))]
        ReportFormat::JsonLines => {
            tracing::warn!("JSON reports need the `serde` feature, falling back to text");
            Arc::new(ConsoleReporter::stdio())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{RecordingHandler, ReportEvent};

    #[test]
    fn test_with_logging_keeps_delivering_events() {
        for verbose in [false, true] {
            let recorder = Arc::new(RecordingHandler::new());
            let handler = with_logging(recorder.clone(), verbose);

            handler.on_event(ReportEvent::LineDone { line_number: 9 });

            assert_eq!(
                recorder.events(),
                vec![ReportEvent::LineDone { line_number: 9 }]
            );
        }
    }

    #[test]
    fn test_verbose_processing_reaches_recorder() {
        let recorder = Arc::new(RecordingHandler::new());
        let handler = with_logging(recorder.clone(), true);
        let processor = LineProcessor::from_config(&ProcessorConfig::default(), handler).unwrap();

        let summary = processor.process_reader("5\n".as_bytes()).unwrap();

        assert_eq!(summary.valid, 1);
        assert_eq!(recorder.events().len(), 4);
    }
}
