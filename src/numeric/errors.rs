// ============================================================================
// Numeric Errors
// Invariant violations surfaced by the string arithmetic routines
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal string arithmetic.
///
/// Well-formed input never produces these. They exist so that a caller who
/// skips validation gets an error value instead of a garbage sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a valid decimal number
    InvalidInput,
    /// A non-digit character was found where a digit was expected
    InvalidDigit {
        /// Byte offset of the offending character
        position: usize,
    },
    /// Operands of a magnitude operation differ in length
    LengthMismatch { left: usize, right: usize },
    /// Operands have their decimal points at different offsets
    PointMismatch,
    /// Subtraction would produce a negative magnitude
    NegativeDifference,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: not a decimal number"),
            NumericError::InvalidDigit { position } => {
                write!(f, "invalid digit at position {}", position)
            },
            NumericError::LengthMismatch { left, right } => write!(
                f,
                "operand length mismatch: {} vs {} characters",
                left, right
            ),
            NumericError::PointMismatch => {
                write!(f, "decimal point offset differs between operands")
            },
            NumericError::NegativeDifference => {
                write!(f, "subtrahend is larger than minuend")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
