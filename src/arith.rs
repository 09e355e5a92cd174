//! Arithmetic helpers and lenient number parsing.
//!
//! The numeric inputs on the page are free text. They are read with
//! [`parse_number_or_zero`], which accepts the longest numeric prefix the
//! way a browser's `parseFloat` does and falls back to zero otherwise.

use crate::error::{PlaygroundError, Result};

/// Sum of two numbers.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Product of two numbers.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Arithmetic mean of two numbers.
pub fn average(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

/// Parse the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. Accepts an optional sign followed by
/// either `Infinity` or a decimal literal with optional fraction and
/// exponent. Anything after the prefix is ignored, so `"12abc"` is 12.
pub fn parse_number(text: &str) -> Result<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Ok(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return Err(PlaygroundError::InvalidNumber {
            input: text.to_string(),
        });
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .map_err(|_| PlaygroundError::InvalidNumber {
            input: text.to_string(),
        })
}

/// Parse a numeric input, substituting zero for anything unusable.
///
/// Unparsable text, NaN and negative zero all become `0.0`.
pub fn parse_number_or_zero(text: &str) -> f64 {
    match parse_number(text) {
        Ok(value) if value != 0.0 && !value.is_nan() => value,
        Ok(_) => 0.0,
        Err(e) => {
            tracing::debug!(error = %e, "substituting 0 for numeric input");
            0.0
        }
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(add(5.0, 3.0), 8.0);
        assert_eq!(multiply(4.0, 2.5), 10.0);
        assert_eq!(average(3.0, 4.0), 3.5);
    }

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("42").unwrap(), 42.0);
        assert_eq!(parse_number("-3.25").unwrap(), -3.25);
        assert_eq!(parse_number("  +7").unwrap(), 7.0);
        assert_eq!(parse_number(".5").unwrap(), 0.5);
        assert_eq!(parse_number("5.").unwrap(), 5.0);
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
        assert_eq!(parse_number("2.5E-1").unwrap(), 0.25);
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(parse_number("12abc").unwrap(), 12.0);
        assert_eq!(parse_number("1.25.5").unwrap(), 1.25);
        assert_eq!(parse_number("1e").unwrap(), 1.0);
        assert_eq!(parse_number("1e+").unwrap(), 1.0);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_number("Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse_number("-Infinity").unwrap(), f64::NEG_INFINITY);
        assert!(parse_number("inf").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for input in ["", "   ", "abc", "-", ".", "+.", "NaN", "e5"] {
            assert!(
                matches!(
                    parse_number(input),
                    Err(PlaygroundError::InvalidNumber { .. })
                ),
                "expected error for {input:?}"
            );
        }
    }

    #[test]
    fn test_or_zero_substitution() {
        assert_eq!(parse_number_or_zero(""), 0.0);
        assert_eq!(parse_number_or_zero("hello"), 0.0);
        assert_eq!(parse_number_or_zero("9"), 9.0);
        let neg_zero = parse_number_or_zero("-0");
        assert_eq!(neg_zero, 0.0);
        assert!(neg_zero.is_sign_positive());
    }

    #[test]
    fn test_bad_input_yields_zero_results() {
        let a = parse_number_or_zero("oops");
        let b = parse_number_or_zero("");
        assert_eq!(add(a, b), 0.0);
        assert_eq!(multiply(a, b), 0.0);
        assert_eq!(average(a, b), 0.0);
    }

    proptest! {
        #[test]
        fn prop_add_multiply_average(a in -1.0e12f64..1.0e12, b in -1.0e12f64..1.0e12) {
            prop_assert_eq!(add(a, b), a + b);
            prop_assert_eq!(multiply(a, b), a * b);
            prop_assert_eq!(average(a, b), (a + b) / 2.0);
        }

        #[test]
        fn prop_formatted_numbers_parse_back(x in -1.0e9f64..1.0e9) {
            let text = format!("{x}");
            prop_assert_eq!(parse_number(&text).unwrap(), x);
        }
    }
}
