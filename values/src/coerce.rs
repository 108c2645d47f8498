//! Scalar coercion helpers backing [`Value::to_int`](crate::Value::to_int)
//! and [`Value::to_text`](crate::Value::to_text).

use alloc::{format, string::String};

/// Truncate toward zero, saturating at the `i64` bounds. NaN is 0.
pub(crate) fn float_to_int(f: f64) -> i64 {
    f as i64
}

/// Parse the leading numeric prefix of `s`.
///
/// Accepts leading whitespace, an optional sign, digits, an optional fraction
/// and an optional exponent. An integral prefix saturates at the `i64`
/// bounds; a fractional or exponent prefix is parsed as a float and
/// truncated. Anything without a numeric prefix is 0.
pub(crate) fn parse_int_prefix(s: &str) -> i64 {
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut i = 0;
    while i < len && matches!(bytes[i], b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C) {
        i += 1;
    }
    let start = i;

    if i < len && matches!(bytes[i], b'+' | b'-') {
        i += 1;
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut is_float = false;
    if i < len && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // A bare trailing dot ("5.") adds nothing to the integer.
        if j > i + 1 {
            is_float = true;
            i = j;
        }
    }

    if int_digits == 0 && !is_float {
        return 0;
    }

    if i < len && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            is_float = true;
            i = j;
        }
    }

    let prefix = &s[start..i];
    if is_float {
        prefix.parse::<f64>().map_or(0, float_to_int)
    } else {
        prefix.parse::<i64>().unwrap_or_else(|_| {
            if prefix.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        })
    }
}

/// Render a float the way loose string coercion expects: shortest
/// round-trip digits, no trailing `.0`, and upper-case `INF`/`NAN`.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NAN".into()
    } else if f.is_infinite() {
        if f.is_sign_positive() { "INF" } else { "-INF" }.into()
    } else {
        format!("{f}")
    }
}

#[cfg(test)]
#[path = "coerce_test.rs"]
mod coerce_test;
