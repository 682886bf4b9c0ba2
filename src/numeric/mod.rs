// ============================================================================
// Numeric Module
// Exact decimal arithmetic performed directly on strings
// ============================================================================
//
// This module provides:
// - is_valid_decimal: syntax check for `[+|-]digits[.digits]`
// - align / AlignedPair: padding two magnitudes to a common shape
// - add_magnitudes / subtract_magnitudes: carry and borrow propagation
// - canonicalize: redundant-zero removal and single-form zero
// - add_strings / DecimalString: signed, exact addition
// - NumericError: invariant violations
//
// Design principles:
// - No floating-point operations
// - Every operation is a pure function of its arguments
// - All arithmetic returns Result (no panics)
// - Operands of any length

mod addition;
mod align;
mod canonical;
mod decimal_string;
mod errors;
mod magnitude;
mod validator;

pub use addition::{add_strings, Sign};
pub use align::{align, AlignedPair};
pub use canonical::canonicalize;
pub use decimal_string::DecimalString;
pub use errors::{NumericError, NumericResult};
pub use magnitude::{add_magnitudes, compare_magnitudes, subtract_magnitudes};
pub use validator::is_valid_decimal;
