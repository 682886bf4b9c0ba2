// ============================================================================
// Decimal Sum Library
// Exact arbitrary-precision addition of decimal strings
// ============================================================================

//! # Decimal Sum
//!
//! Validation and exact addition of decimal numbers kept as text, with no
//! floating point anywhere on the arithmetic path.
//!
//! ## Features
//!
//! - **Syntax validation** of `[+|-]digits[.digits]`
//! - **Exact addition** of signed decimals of any length
//! - **Canonical output**: no redundant zeros, no negative zero
//! - **Line processing** of text files with pluggable report handlers
//!
//! ## Example
//!
//! ```rust
//! use decimal_sum::prelude::*;
//! use std::sync::Arc;
//!
//! assert!(is_valid_decimal("-123.456"));
//! assert_eq!(add_strings("0.1", "0.2").unwrap(), "0.3");
//!
//! // Check lines of text against a fixed addend
//! let handler = Arc::new(RecordingHandler::new());
//! let processor = LineProcessor::from_config(&ProcessorConfig::default(), handler.clone())
//!     .unwrap();
//!
//! let summary = processor.process_reader("100\nnope\n".as_bytes()).unwrap();
//! assert_eq!(summary.valid, 1);
//! assert_eq!(summary.invalid, 1);
//! ```

pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod processing;

// Re-exports for convenience
pub mod prelude {
    pub use crate::interfaces::{
        FanOutHandler, LoggingReportHandler, NoOpReportHandler, RecordingHandler, ReportEvent,
        ReportHandler,
    };
    pub use crate::numeric::{
        add_strings, is_valid_decimal, DecimalString, NumericError, NumericResult, Sign,
    };
    pub use crate::processing::{
        ConsoleReporter, LineOutcome, LineProcessor, ProcessError, ProcessSummary,
        ProcessorConfig, ReportFormat,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_processing() {
        let handler = Arc::new(RecordingHandler::new());
        let processor =
            LineProcessor::from_config(&ProcessorConfig::default(), handler.clone()).unwrap();

        let input = " 123.456 \n\n--5\n999999999999999999999.999\n";
        let summary = processor.process_reader(input.as_bytes()).unwrap();

        assert_eq!(summary.valid, 2);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.blank_lines, 1);

        let sums: Vec<String> = handler
            .events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Sum { sum, .. } => Some(sum),
                _ => None,
            })
            .collect();
        assert_eq!(sums, vec!["0", "999999999999999999876.543"]);

        assert!(handler
            .events()
            .iter()
            .any(|e| matches!(e, ReportEvent::Invalid { line, .. } if line == "--5")));
    }
}
