// ============================================================================
// Signed Decimal Addition
// Orchestrates sign handling, alignment, digit arithmetic and canonical form
// ============================================================================

use super::align::align;
use super::canonical::canonicalize;
use super::errors::{NumericError, NumericResult};
use super::magnitude::{add_magnitudes, compare_magnitudes, subtract_magnitudes};
use super::validator::is_valid_decimal;
use std::cmp::Ordering;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Sign
// ============================================================================

/// Sign of a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Split a leading `+`/`-` off `s`, returning the sign and the magnitude.
    ///
    /// A missing sign is positive.
    pub fn split(s: &str) -> (Self, &str) {
        if let Some(rest) = s.strip_prefix('-') {
            (Sign::Negative, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (Sign::Positive, rest)
        } else {
            (Sign::Positive, s)
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

impl Neg for Sign {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

// ============================================================================
// Addition
// ============================================================================

/// Attach `sign` to a canonical magnitude. Zero is always unsigned.
pub(crate) fn with_sign(sign: Sign, magnitude: String) -> String {
    if sign.is_negative() && magnitude != "0" {
        format!("-{}", magnitude)
    } else {
        magnitude
    }
}

/// Exactly add two decimal strings.
///
/// Works on the characters alone, so operands of any length are summed
/// without loss. The result is canonical: no redundant leading or trailing
/// zeros and never a negative zero.
///
/// # Errors
/// Returns `InvalidInput` if either operand is not a valid decimal string.
///
/// # Example
/// ```
/// use decimal_sum::numeric::add_strings;
///
/// assert_eq!(add_strings("1.1", "2.9").unwrap(), "4");
/// assert_eq!(add_strings("-5", "3").unwrap(), "-2");
/// assert_eq!(add_strings("5", "-5").unwrap(), "0");
/// ```
pub fn add_strings(num1: &str, num2: &str) -> NumericResult<String> {
    if !is_valid_decimal(num1) || !is_valid_decimal(num2) {
        return Err(NumericError::InvalidInput);
    }

    let (sign1, mag1) = Sign::split(num1);
    let (sign2, mag2) = Sign::split(num2);

    let pair = align(mag1, mag2);
    let fraction_digits = pair.fraction_digits();
    let point = pair.point();
    let (mut lhs, mut rhs) = pair.into_parts();

    // Digits only from here; the point goes back in by fraction width
    if let Some(p) = point {
        lhs.remove(p);
        rhs.remove(p);
    }

    let (mut raw, sign) = if sign1 == sign2 {
        (add_magnitudes(&lhs, &rhs)?, sign1)
    } else if compare_magnitudes(&lhs, &rhs) == Ordering::Less {
        (subtract_magnitudes(&rhs, &lhs)?, -sign1)
    } else {
        (subtract_magnitudes(&lhs, &rhs)?, sign1)
    };

    if fraction_digits > 0 {
        raw.insert(raw.len() - fraction_digits, '.');
    }

    Ok(with_sign(sign, canonicalize(&raw)))
}
