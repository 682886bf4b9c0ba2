// ============================================================================
// Decimal String
// Validated textual decimal with exact, arbitrary-precision addition
// ============================================================================

use super::addition::{add_strings, with_sign, Sign};
use super::canonical::canonicalize;
use super::errors::{NumericError, NumericResult};
use super::validator::is_valid_decimal;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validated decimal number kept in its textual form.
///
/// The only way to build one is through validation, so every value matches
/// `[+|-]digits[.digits]`. Equality is textual: `"1.0"` and `"1"` differ
/// until both are passed through [`DecimalString::canonical`].
///
/// # Example
/// ```
/// use decimal_sum::numeric::DecimalString;
///
/// let a: DecimalString = "0.1".parse().unwrap();
/// let b: DecimalString = "0.2".parse().unwrap();
/// assert_eq!((a + b).as_str(), "0.3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct DecimalString(String);

impl DecimalString {
    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sign of the number as written. `"-0"` reports `Negative`.
    #[inline]
    pub fn sign(&self) -> Sign {
        Sign::split(&self.0).0
    }

    /// The unsigned digits, with the point if there is one.
    #[inline]
    pub fn magnitude(&self) -> &str {
        Sign::split(&self.0).1
    }

    /// Check if the value is zero, whatever its sign or padding.
    pub fn is_zero(&self) -> bool {
        self.magnitude().bytes().all(|b| b == b'0' || b == b'.')
    }

    /// Canonical form of the same value.
    ///
    /// Drops a `+` sign, redundant zeros, and the sign of zero.
    pub fn canonical(&self) -> Self {
        Self(with_sign(self.sign(), canonicalize(self.magnitude())))
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact addition. The result is canonical.
    ///
    /// # Errors
    /// Cannot fail for two validated operands; an error here means an
    /// internal invariant was broken.
    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        add_strings(&self.0, &rhs.0).map(Self)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

// Infallible Add for ergonomics (panics only on an internal invariant failure)
impl Add for DecimalString {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs)
            .expect("DecimalString addition invariant violated")
    }
}

impl<'a> Add<&'a DecimalString> for &'a DecimalString {
    type Output = DecimalString;

    #[inline]
    fn add(self, rhs: &'a DecimalString) -> Self::Output {
        self.checked_add(rhs)
            .expect("DecimalString addition invariant violated")
    }
}

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DecimalString {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<DecimalString> for String {
    #[inline]
    fn from(d: DecimalString) -> Self {
        d.0
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for DecimalString {
    type Err = NumericError;

    /// Parse without trimming; surrounding whitespace is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_decimal(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(NumericError::InvalidInput)
        }
    }
}

impl TryFrom<&str> for DecimalString {
    type Error = NumericError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for DecimalString {
    type Error = NumericError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if is_valid_decimal(&s) {
            Ok(Self(s))
        } else {
            Err(NumericError::InvalidInput)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
