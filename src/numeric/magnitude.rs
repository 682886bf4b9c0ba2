// ============================================================================
// Magnitude Arithmetic
// Carry/borrow propagation over equal-length unsigned digit strings
// ============================================================================
//
// Operands are ASCII digit strings of equal length. A decimal point, if
// present, must sit at the same index in both and is copied through to the
// result untouched. No leading or trailing zeros are removed here; that is
// the canonicalizer's job.

use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;

/// Check the shared-shape precondition of the digit routines.
fn check_shape(a: &[u8], b: &[u8]) -> NumericResult<()> {
    if a.len() != b.len() {
        return Err(NumericError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Decode the digit pair at `i`, or `None` when both hold a point.
#[inline]
fn digit_pair(a: &[u8], b: &[u8], i: usize) -> NumericResult<Option<(u8, u8)>> {
    match (a[i], b[i]) {
        (b'.', b'.') => Ok(None),
        (b'.', _) | (_, b'.') => Err(NumericError::PointMismatch),
        (x, y) if x.is_ascii_digit() && y.is_ascii_digit() => Ok(Some((x - b'0', y - b'0'))),
        _ => Err(NumericError::InvalidDigit { position: i }),
    }
}

/// Add two aligned magnitudes.
///
/// The result is either as long as the inputs or one digit longer when the
/// leftmost position carries.
///
/// # Errors
/// `LengthMismatch`, `PointMismatch` or `InvalidDigit` if the operands are
/// not an aligned pair of digit strings.
pub fn add_magnitudes(a: &str, b: &str) -> NumericResult<String> {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    check_shape(a, b)?;

    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u8;

    for i in (0..a.len()).rev() {
        match digit_pair(a, b, i)? {
            None => out.push(b'.'),
            Some((x, y)) => {
                let sum = x + y + carry;
                out.push(b'0' + sum % 10);
                carry = sum / 10;
            },
        }
    }

    if carry > 0 {
        out.push(b'0' + carry);
    }

    out.reverse();
    Ok(ascii_to_string(out))
}

/// Subtract `b` from `a`, both aligned magnitudes with `a >= b`.
///
/// The result has the same length as the inputs and keeps any leading zeros.
///
/// # Errors
/// `NegativeDifference` if `b > a`, otherwise the same shape errors as
/// [`add_magnitudes`].
pub fn subtract_magnitudes(a: &str, b: &str) -> NumericResult<String> {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    check_shape(a, b)?;

    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i8;

    for i in (0..a.len()).rev() {
        match digit_pair(a, b, i)? {
            None => out.push(b'.'),
            Some((x, y)) => {
                let mut diff = x as i8 - y as i8 - borrow;
                if diff < 0 {
                    diff += 10;
                    borrow = 1;
                } else {
                    borrow = 0;
                }
                out.push(b'0' + diff as u8);
            },
        }
    }

    if borrow != 0 {
        return Err(NumericError::NegativeDifference);
    }

    out.reverse();
    Ok(ascii_to_string(out))
}

/// Numerically compare two unsigned digit strings.
///
/// Leading zeros are ignored, so the comparison does not depend on the
/// operands having been padded to the same width. Both strings must be
/// point-free.
pub fn compare_magnitudes(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[inline]
fn ascii_to_string(bytes: Vec<u8>) -> String {
    // Only ASCII digits and '.' are ever pushed
    bytes.into_iter().map(char::from).collect()
}
