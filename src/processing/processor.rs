// ============================================================================
// Line Processor
// Validates each input line and adds a fixed addend to the valid ones
// ============================================================================

use super::config::ProcessorConfig;
use super::errors::{ProcessError, ProcessResult};
use crate::interfaces::{ReportEvent, ReportHandler};
use crate::numeric::{is_valid_decimal, DecimalString};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

/// Result of processing a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Nothing left after stripping whitespace
    Blank,
    /// Not a decimal number
    Invalid { line: String },
    /// A decimal number, with its sum against the addend
    Valid { line: String, sum: DecimalString },
}

/// Counters for a processing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessSummary {
    /// Whether the input was opened at all
    pub opened: bool,
    pub lines_read: usize,
    pub blank_lines: usize,
    pub valid: usize,
    pub invalid: usize,
}

/// Remove every whitespace character from a line.
///
/// Whitespace here is the C locale set: space, tab, newline, vertical tab,
/// form feed and carriage return.
pub fn strip_whitespace(line: &str) -> String {
    line.chars()
        .filter(|c| !(c.is_ascii_whitespace() || *c == '\x0b'))
        .collect()
}

/// Checks lines of text and reports on each through a [`ReportHandler`].
pub struct LineProcessor {
    addend: DecimalString,
    handler: Arc<dyn ReportHandler>,
}

impl LineProcessor {
    pub fn new(addend: DecimalString, handler: Arc<dyn ReportHandler>) -> Self {
        Self { addend, handler }
    }

    /// Build a processor from a configuration.
    ///
    /// # Errors
    /// `Config` if the configuration does not validate.
    pub fn from_config(
        config: &ProcessorConfig,
        handler: Arc<dyn ReportHandler>,
    ) -> ProcessResult<Self> {
        config.validate().map_err(ProcessError::Config)?;
        let addend = config
            .addend
            .parse()
            .map_err(|e| ProcessError::Config(format!("{}", e)))?;
        Ok(Self::new(addend, handler))
    }

    #[inline]
    pub fn addend(&self) -> &DecimalString {
        &self.addend
    }

    /// Process one raw line, emitting its report events.
    ///
    /// `line_number` is 1-based and only used for reporting.
    pub fn process_line(&self, line_number: usize, raw: &str) -> ProcessResult<LineOutcome> {
        let line = strip_whitespace(raw);
        if line.is_empty() {
            return Ok(LineOutcome::Blank);
        }

        self.handler.on_event(ReportEvent::Processing {
            line_number,
            line: line.clone(),
        });

        let outcome = if is_valid_decimal(&line) {
            self.handler.on_event(ReportEvent::Valid {
                line_number,
                line: line.clone(),
            });

            let value: DecimalString = line.parse().map_err(|source| {
                ProcessError::Arithmetic {
                    line_number,
                    source,
                }
            })?;
            let sum = value
                .checked_add(&self.addend)
                .map_err(|source| ProcessError::Arithmetic {
                    line_number,
                    source,
                })?;

            self.handler.on_event(ReportEvent::Sum {
                line_number,
                addend: self.addend.to_string(),
                sum: sum.to_string(),
            });
            LineOutcome::Valid { line, sum }
        } else {
            tracing::debug!(line_number, line = %line, "rejected line");
            self.handler.on_event(ReportEvent::Invalid {
                line_number,
                line: line.clone(),
            });
            LineOutcome::Invalid { line }
        };

        self.handler.on_event(ReportEvent::LineDone { line_number });
        Ok(outcome)
    }

    /// Process every line of `reader` until end of input.
    ///
    /// Lines that are not UTF-8 are decoded lossily, so they are reported as
    /// invalid rather than aborting the run.
    ///
    /// # Errors
    /// `Read` on an I/O failure, `Arithmetic` on an internal invariant failure.
    pub fn process_reader<R: BufRead>(&self, mut reader: R) -> ProcessResult<ProcessSummary> {
        let mut summary = ProcessSummary {
            opened: true,
            ..ProcessSummary::default()
        };
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines_read += 1;

            let raw = String::from_utf8_lossy(&buf);
            match self.process_line(summary.lines_read, &raw)? {
                LineOutcome::Blank => summary.blank_lines += 1,
                LineOutcome::Invalid { .. } => summary.invalid += 1,
                LineOutcome::Valid { .. } => summary.valid += 1,
            }
        }

        Ok(summary)
    }

    /// Open `path` and process it line by line.
    ///
    /// A file that cannot be opened is reported through the handler and
    /// yields a summary with `opened == false`; it is not an error.
    ///
    /// # Errors
    /// Same as [`process_reader`](Self::process_reader).
    pub fn process_file<P: AsRef<Path>>(&self, path: P) -> ProcessResult<ProcessSummary> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        self.handler.on_event(ReportEvent::FileStarted {
            path: shown.clone(),
        });

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(path = %shown, error = %e, "could not open input file");
                self.handler.on_event(ReportEvent::OpenFailed {
                    path: shown,
                    reason: e.to_string(),
                });
                return Ok(ProcessSummary::default());
            },
        };

        tracing::debug!(path = %shown, "processing input file");
        self.process_reader(BufReader::new(file))
    }
}
