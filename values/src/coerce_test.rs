//! Tests for scalar coercion helpers

use super::*;

// ============================================================================
// Integer prefix parsing
// ============================================================================

#[test]
fn test_plain_integers() {
    assert_eq!(parse_int_prefix("3"), 3);
    assert_eq!(parse_int_prefix("-42"), -42);
    assert_eq!(parse_int_prefix("+4"), 4);
    assert_eq!(parse_int_prefix("007"), 7);
}

#[test]
fn test_no_numeric_prefix() {
    assert_eq!(parse_int_prefix(""), 0);
    assert_eq!(parse_int_prefix("x"), 0);
    assert_eq!(parse_int_prefix("abc123"), 0);
    assert_eq!(parse_int_prefix("-"), 0);
    assert_eq!(parse_int_prefix("."), 0);
    assert_eq!(parse_int_prefix("e5"), 0);
}

#[test]
fn test_trailing_garbage_is_ignored() {
    assert_eq!(parse_int_prefix("12abc"), 12);
    assert_eq!(parse_int_prefix("5."), 5);
    assert_eq!(parse_int_prefix("5.x"), 5);
    assert_eq!(parse_int_prefix("9e"), 9);
    assert_eq!(parse_int_prefix("9e+"), 9);
}

#[test]
fn test_leading_whitespace() {
    assert_eq!(parse_int_prefix("  12"), 12);
    assert_eq!(parse_int_prefix("\t\n\r\x0B\x0C-3"), -3);
    // Whitespace between sign and digits is not a number.
    assert_eq!(parse_int_prefix("- 3"), 0);
}

#[test]
fn test_fractions_truncate() {
    assert_eq!(parse_int_prefix("7.5"), 7);
    assert_eq!(parse_int_prefix("-7.9"), -7);
    assert_eq!(parse_int_prefix(".5"), 0);
    assert_eq!(parse_int_prefix("0.999"), 0);
}

#[test]
fn test_exponents() {
    assert_eq!(parse_int_prefix("1e3"), 1000);
    assert_eq!(parse_int_prefix("2.5E2"), 250);
    assert_eq!(parse_int_prefix("15e-1"), 1);
    assert_eq!(parse_int_prefix("1e400"), i64::MAX);
}

#[test]
fn test_integer_overflow_saturates() {
    assert_eq!(parse_int_prefix("99999999999999999999"), i64::MAX);
    assert_eq!(parse_int_prefix("-99999999999999999999"), i64::MIN);
    assert_eq!(parse_int_prefix("9223372036854775807"), i64::MAX);
}

// ============================================================================
// Float conversion
// ============================================================================

#[test]
fn test_float_to_int() {
    assert_eq!(float_to_int(7.9), 7);
    assert_eq!(float_to_int(-7.9), -7);
    assert_eq!(float_to_int(f64::NAN), 0);
    assert_eq!(float_to_int(f64::INFINITY), i64::MAX);
    assert_eq!(float_to_int(f64::NEG_INFINITY), i64::MIN);
}

#[test]
fn test_format_float() {
    assert_eq!(format_float(7.5), "7.5");
    assert_eq!(format_float(3.0), "3");
    assert_eq!(format_float(-0.25), "-0.25");
    assert_eq!(format_float(f64::INFINITY), "INF");
    assert_eq!(format_float(f64::NEG_INFINITY), "-INF");
    assert_eq!(format_float(f64::NAN), "NAN");
}
