// ============================================================================
// Canonical Form
// Removes redundant zeros and collapses every zero to a single "0"
// ============================================================================

/// Canonicalize an unsigned digit string with an optional decimal point.
///
/// - trailing fractional zeros are dropped, and the point with them when the
///   fraction becomes empty
/// - leading integer zeros are dropped, keeping one digit before the point
/// - any zero value (including the empty string) becomes `"0"`
///
/// # Example
/// ```
/// use decimal_sum::numeric::canonicalize;
///
/// assert_eq!(canonicalize("004.50"), "4.5");
/// assert_eq!(canonicalize("00.050"), "0.05");
/// assert_eq!(canonicalize("000.000"), "0");
/// ```
pub fn canonicalize(raw: &str) -> String {
    let mut s = raw;

    if s.contains('.') {
        s = s.trim_end_matches('0');
        s = s.strip_suffix('.').unwrap_or(s);
    }

    match s.find(|c: char| c != '0') {
        // All zeros (or empty)
        None => return "0".to_string(),
        Some(0) => {},
        Some(pos) => {
            // Keep the zero in front of a leading point
            let start = if s.as_bytes()[pos] == b'.' { pos - 1 } else { pos };
            s = &s[start..];
        },
    }

    s.to_string()
}
