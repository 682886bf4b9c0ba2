// ============================================================================
// Operand Alignment
// Pads two unsigned magnitudes to a common integer and fractional width
// ============================================================================

/// Two unsigned magnitudes padded to the same shape.
///
/// Invariant: `lhs.len() == rhs.len()`, and when `point` is `Some(i)` both
/// strings carry their decimal point at byte index `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    lhs: String,
    rhs: String,
    point: Option<usize>,
}

impl AlignedPair {
    /// Left operand.
    #[inline]
    pub fn lhs(&self) -> &str {
        &self.lhs
    }

    /// Right operand.
    #[inline]
    pub fn rhs(&self) -> &str {
        &self.rhs
    }

    /// Shared index of the decimal point, if the pair has one.
    #[inline]
    pub fn point(&self) -> Option<usize> {
        self.point
    }

    /// Number of digits after the decimal point (zero for integers).
    #[inline]
    pub fn fraction_digits(&self) -> usize {
        self.point.map_or(0, |p| self.lhs.len() - p - 1)
    }

    /// Consume the pair, yielding both operands.
    #[inline]
    pub fn into_parts(self) -> (String, String) {
        (self.lhs, self.rhs)
    }
}

/// Split an unsigned magnitude at its point.
fn split_point(s: &str) -> (&str, Option<&str>) {
    match s.find('.') {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    }
}

/// Align two unsigned magnitudes for positional digit arithmetic.
///
/// When either operand has a fractional part, an operand without one gains a
/// synthetic `.0`. Integer parts are then left-padded with `0` and fractional
/// parts right-padded with `0` until both match. Pure integers are only
/// left-padded.
///
/// # Example
/// ```
/// use decimal_sum::numeric::align;
///
/// let pair = align("12.5", "3");
/// assert_eq!(pair.lhs(), "12.5");
/// assert_eq!(pair.rhs(), "03.0");
/// assert_eq!(pair.point(), Some(2));
/// ```
pub fn align(a: &str, b: &str) -> AlignedPair {
    let (int_a, frac_a) = split_point(a);
    let (int_b, frac_b) = split_point(b);

    let int_width = int_a.len().max(int_b.len());

    if frac_a.is_none() && frac_b.is_none() {
        return AlignedPair {
            lhs: format!("{:0>width$}", int_a, width = int_width),
            rhs: format!("{:0>width$}", int_b, width = int_width),
            point: None,
        };
    }

    let frac_a = frac_a.unwrap_or("0");
    let frac_b = frac_b.unwrap_or("0");
    let frac_width = frac_a.len().max(frac_b.len());

    let pad = |int: &str, frac: &str| {
        format!(
            "{:0>iw$}.{:0<fw$}",
            int,
            frac,
            iw = int_width,
            fw = frac_width
        )
    };

    AlignedPair {
        lhs: pad(int_a, frac_a),
        rhs: pad(int_b, frac_b),
        point: Some(int_width),
    }
}
