// ============================================================================
// Processing Errors
// Failures that abort file processing
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;
use std::io;

/// Errors that stop a processing run.
///
/// An unopenable input file is not one of them: it is reported through the
/// handler and processing ends normally.
#[derive(Debug)]
pub enum ProcessError {
    /// Configuration rejected by validation
    Config(String),
    /// Reading the input failed part-way through
    Read { source: io::Error },
    /// Arithmetic on a validated line broke an internal invariant
    Arithmetic {
        line_number: usize,
        source: NumericError,
    },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Config(msg) => write!(f, "invalid configuration: {}", msg),
            ProcessError::Read { source } => write!(f, "failed to read input: {}", source),
            ProcessError::Arithmetic {
                line_number,
                source,
            } => write!(f, "arithmetic failed on line {}: {}", line_number, source),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Config(_) => None,
            ProcessError::Read { source } => Some(source),
            ProcessError::Arithmetic { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for ProcessError {
    fn from(source: io::Error) -> Self {
        ProcessError::Read { source }
    }
}

/// Result type alias for processing operations
pub type ProcessResult<T> = Result<T, ProcessError>;
