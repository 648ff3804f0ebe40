//! Numeric literal handling for counters
//!
//! Counter targets come from free text. Parsing is lenient: the longest
//! leading decimal literal wins and anything unparsable becomes NaN, which
//! then renders as "NaN" rather than failing.

use serde::de::{self, Visitor};
use serde::Deserializer;
use std::fmt;

/// Upper bound on rendered fraction digits
pub const MAX_DECIMALS: usize = 100;

/// Parse the longest leading decimal literal of `text`
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction, an optional exponent, or `Infinity`. Returns NaN when
/// no digits are found.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits > 0 || frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Number of fraction digits declared by the literal text
///
/// Counts the characters between the first and second `.`; zero when the
/// text has no `.` at all.
pub fn decimals(text: &str) -> usize {
    text.split('.')
        .nth(1)
        .map(|fraction| fraction.chars().count())
        .unwrap_or(0)
        .min(MAX_DECIMALS)
}

/// Magnitude from which fixed notation gives way to exponent notation
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Render `value` with exactly `decimals` fraction digits
///
/// Exact halves round away from zero. Magnitudes of 1e21 and above use the
/// shortest exponent form, e.g. `1e+21`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= EXPONENT_THRESHOLD {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }

    // -0.0 + 0.0 is +0.0, so an exact negative zero prints unsigned
    let value = value + 0.0;
    if is_exact_half(value, decimals) {
        // One more digit is exact and ends in 5; drop it and carry
        let exact = format!("{:.*}", decimals + 1, value);
        return round_up_last_digit(&exact[..exact.len() - 1]);
    }
    format!("{:.*}", decimals, value)
}

/// True when `value * 10^decimals` has a fractional part of exactly one half
///
/// With `value = m * 2^e`, that holds iff `m * 5^decimals * 2^(e + 1 + decimals)`
/// is an odd integer, i.e. the power of two cancels exactly.
fn is_exact_half(value: f64, decimals: usize) -> bool {
    let bits = value.abs().to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };
    if mantissa == 0 {
        return false;
    }
    exponent + 1 + decimals as i64 + mantissa.trailing_zeros() as i64 == 0
}

/// Add one unit in the last place of a decimal string, keeping its sign
fn round_up_last_digit(text: &str) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let digits = digits.strip_suffix('.').unwrap_or(digits);

    let mut out: Vec<u8> = digits.bytes().collect();
    let mut carry = true;
    for byte in out.iter_mut().rev() {
        if !carry {
            break;
        }
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                carry = false;
            }
        }
    }
    if carry {
        out.insert(0, b'1');
    }

    let mut result = String::with_capacity(out.len() + 1);
    result.push_str(sign);
    result.extend(out.into_iter().map(char::from));
    result
}

/// Deserialize a counter literal given either as a string or a bare number
pub(crate) fn deserialize_literal<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct LiteralVisitor;

    impl<'de> Visitor<'de> for LiteralVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a numeric literal as a string or a number")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(LiteralVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_float("1000"), 1000.0);
        assert_eq!(parse_float("42.5"), 42.5);
        assert_eq!(parse_float("-3.25"), -3.25);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("7."), 7.0);
        assert_eq!(parse_float("  12"), 12.0);
        assert_eq!(parse_float("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_takes_leading_prefix() {
        assert_eq!(parse_float("12abc"), 12.0);
        assert_eq!(parse_float("1.2.3"), 1.2);
        assert_eq!(parse_float("5e"), 5.0);
        assert_eq!(parse_float("5e+"), 5.0);
        assert_eq!(parse_float("+8"), 8.0);
    }

    #[test]
    fn test_parse_garbage_is_nan() {
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("$5").is_nan());
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_decimals() {
        assert_eq!(decimals("1000"), 0);
        assert_eq!(decimals("42.5"), 1);
        assert_eq!(decimals("3.14159"), 5);
        assert_eq!(decimals("7."), 0);
        assert_eq!(decimals("1.25.9"), 2);
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(42.5, 1), "42.5");
        assert_eq!(format_fixed(1000.0, 0), "1000");
        assert_eq!(format_fixed(0.0, 2), "0.00");
        assert_eq!(format_fixed(-0.0, 0), "0");
        assert_eq!(format_fixed(f64::NAN, 2), "NaN");
        assert_eq!(format_fixed(f64::INFINITY, 0), "Infinity");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 0), "-Infinity");
    }

    #[test]
    fn test_format_fixed_rounds_halves_away_from_zero() {
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(0.5, 0), "1");
        assert_eq!(format_fixed(10.5, 0), "11");
        assert_eq!(format_fixed(-2.5, 0), "-3");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(9.5, 0), "10");
        assert_eq!(format_fixed(0.375, 2), "0.38");
        // Not exact halves in binary, so ordinary rounding applies
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(2.4, 0), "2");
        assert_eq!(format_fixed(2.6, 0), "3");
    }

    #[test]
    fn test_format_fixed_huge_values_use_exponent() {
        assert_eq!(format_fixed(1e21, 0), "1e+21");
        assert_eq!(format_fixed(1.5e21, 2), "1.5e+21");
        assert_eq!(format_fixed(-2e22, 0), "-2e+22");
        assert_eq!(format_fixed(1e20, 0), "100000000000000000000");
    }
}
