// ============================================================================
// Decimal Syntax Validation
// Recognizes `[+|-]digits[.digits]` with no exponent and no whitespace
// ============================================================================

/// Check whether `s` is a syntactically valid signed decimal number.
///
/// Accepted shape: an optional leading `+` or `-`, at least one digit before
/// the point, and, when a point is present, at least one digit after it.
/// Whitespace is never tolerated; callers strip it first.
///
/// # Example
/// ```
/// use decimal_sum::numeric::is_valid_decimal;
///
/// assert!(is_valid_decimal("-123.456"));
/// assert!(!is_valid_decimal("1."));
/// assert!(!is_valid_decimal(".5"));
/// ```
pub fn is_valid_decimal(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    let mut i = 0;
    if matches!(bytes[0], b'+' | b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let has_digit = i > int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;

        // A bare trailing point is not a number
        if i >= bytes.len() || !bytes[i].is_ascii_digit() {
            return false;
        }
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }

    has_digit && i == bytes.len()
}
