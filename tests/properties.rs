// ============================================================================
// Arithmetic Properties
// Exactness, canonical form and algebraic laws of string addition
// ============================================================================

use decimal_sum::numeric::{add_strings, align, is_valid_decimal, DecimalString};
use num_bigint::BigInt;
use proptest::prelude::*;
use quickcheck::{quickcheck, TestResult};
use rust_decimal::Decimal;
use std::str::FromStr;

// ============================================================================
// Helpers
// ============================================================================

/// Parse a decimal string into an integer and the number of fractional digits.
fn to_scaled(s: &str) -> (BigInt, usize) {
    let (negative, body) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let scale = body.find('.').map_or(0, |p| body.len() - p - 1);
    let digits: String = body.chars().filter(|c| *c != '.').collect();
    let n = BigInt::parse_bytes(digits.as_bytes(), 10).unwrap();
    (if negative { -n } else { n }, scale)
}

fn rescale(n: BigInt, from: usize, to: usize) -> BigInt {
    n * BigInt::from(10u32).pow((to - from) as u32)
}

/// `-?(0|[1-9][0-9]*)(\.[0-9]*[1-9])?` and never `-0`.
fn is_canonical(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    if s.starts_with('-') && body == "0" {
        return false;
    }
    let (int, frac) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let int_ok = int == "0"
        || (!int.is_empty() && !int.starts_with('0') && int.bytes().all(|b| b.is_ascii_digit()));
    let frac_ok = frac.map_or(true, |f| {
        !f.is_empty() && !f.ends_with('0') && f.bytes().all(|b| b.is_ascii_digit())
    });
    int_ok && frac_ok
}

/// Build a valid decimal string from arbitrary quickcheck input.
fn build(negative: bool, int: Vec<u8>, frac: Vec<u8>) -> String {
    let mut s = String::new();
    if negative {
        s.push('-');
    }
    if int.is_empty() {
        s.push('0');
    }
    s.extend(int.iter().take(50).map(|d| char::from(b'0' + d % 10)));
    if !frac.is_empty() {
        s.push('.');
        s.extend(frac.iter().take(50).map(|d| char::from(b'0' + d % 10)));
    }
    s
}

const DECIMAL: &str = "[-+]?[0-9]{1,40}(\\.[0-9]{1,40})?";

// ============================================================================
// proptest
// ============================================================================

proptest! {
    #[test]
    fn prop_sum_is_exact(a in DECIMAL, b in DECIMAL) {
        let sum = add_strings(&a, &b).unwrap();

        let (na, sa) = to_scaled(&a);
        let (nb, sb) = to_scaled(&b);
        let (nr, sr) = to_scaled(&sum);
        let scale = sa.max(sb).max(sr);

        prop_assert_eq!(
            rescale(na, sa, scale) + rescale(nb, sb, scale),
            rescale(nr, sr, scale)
        );
    }

    #[test]
    fn prop_sum_is_canonical(a in DECIMAL, b in DECIMAL) {
        let sum = add_strings(&a, &b).unwrap();
        prop_assert!(is_canonical(&sum), "not canonical: {}", sum);
        prop_assert!(is_valid_decimal(&sum));
    }

    #[test]
    fn prop_matches_rust_decimal(
        a in "-?[0-9]{1,12}(\\.[0-9]{1,8})?",
        b in "-?[0-9]{1,12}(\\.[0-9]{1,8})?",
    ) {
        let expected = (Decimal::from_str(&a).unwrap() + Decimal::from_str(&b).unwrap())
            .normalize()
            .to_string();
        prop_assert_eq!(add_strings(&a, &b).unwrap(), expected);
    }

    #[test]
    fn prop_alignment_shape(
        a in "[0-9]{1,20}(\\.[0-9]{1,20})?",
        b in "[0-9]{1,20}(\\.[0-9]{1,20})?",
    ) {
        let pair = align(&a, &b);
        prop_assert_eq!(pair.lhs().len(), pair.rhs().len());
        prop_assert_eq!(pair.lhs().find('.'), pair.point());
        prop_assert_eq!(pair.rhs().find('.'), pair.point());
        if a.contains('.') || b.contains('.') {
            prop_assert!(pair.point().is_some());
        }
    }

    #[test]
    fn prop_negation_sums_to_zero(a in "[0-9]{1,40}(\\.[0-9]{1,40})?") {
        let neg = format!("-{}", a);
        prop_assert_eq!(add_strings(&a, &neg).unwrap(), "0");
    }
}

// ============================================================================
// quickcheck
// ============================================================================

quickcheck! {
    fn qc_commutative(n1: bool, i1: Vec<u8>, f1: Vec<u8>, n2: bool, i2: Vec<u8>, f2: Vec<u8>) -> bool {
        let a = build(n1, i1, f1);
        let b = build(n2, i2, f2);
        add_strings(&a, &b).unwrap() == add_strings(&b, &a).unwrap()
    }

    fn qc_additive_identity(negative: bool, int: Vec<u8>, frac: Vec<u8>) -> TestResult {
        let a = build(negative, int, frac);
        let Ok(value) = DecimalString::from_str(&a) else {
            return TestResult::discard();
        };
        TestResult::from_bool(add_strings(&a, "0").unwrap() == value.canonical().as_str())
    }
}

// ============================================================================
// Fixed scenarios
// ============================================================================

#[test]
fn test_spec_scenarios() {
    let cases = [
        ("1", "2", "3"),
        ("1.1", "2.9", "4"),
        ("-5", "3", "-2"),
        ("5", "-5", "0"),
        ("0.001", "0.002", "0.003"),
        ("999", "1", "1000"),
        ("99", "1", "100"),
        ("9.9", "0.1", "10"),
    ];
    for (a, b, expected) in cases {
        assert_eq!(add_strings(a, b).unwrap(), expected, "{} + {}", a, b);
    }
}

#[test]
fn test_hundreds_of_digits() {
    let a = format!("{}.{}", "1".repeat(300), "1".repeat(300));
    let b = format!("-{}.{}", "1".repeat(300), "1".repeat(299));
    let expected = format!("0.{}1", "0".repeat(299));
    assert_eq!(add_strings(&a, &b).unwrap(), expected);
}
