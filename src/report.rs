//! Summaries written into the result regions.
//!
//! Each report is a list of labelled rows. The web UI renders a row as a
//! bold label followed by the value and a line break; the CLI prints
//! `Label: value`.

use std::fmt;

use crate::arith::{add, average, multiply};
use crate::text::{reverse, uppercase, vowel_count, word_count};

/// Text of the local variable shown by the scope demo.
pub const LOCAL_VARIABLE: &str = "I am a local variable!";

/// One labelled line of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: &'static str,
    pub value: String,
}

impl Row {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Anything that renders as labelled rows.
pub trait Report {
    fn rows(&self) -> Vec<Row>;
}

/// Format a number the way the page displays it.
///
/// Integral values have no fractional part, infinities are spelled out,
/// and magnitudes of at least `1e21` or below `1e-6` switch to exponent
/// form (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let formatted = format!("{n:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        format!("{n}")
    }
}

/// Digits printed past the requested precision to spot an exact tie.
const TIE_DIGITS: usize = 30;

/// Format with a fixed number of decimals.
///
/// Values exactly halfway between two candidates round away from zero,
/// so `0.625` becomes `0.63`.
pub fn format_fixed(n: f64, decimals: usize) -> String {
    if !n.is_finite() || n.abs() >= 1e21 {
        return format_number(n);
    }
    let exact = format!("{:.*}", decimals + TIE_DIGITS, n.abs());
    let (kept, rest) = exact.split_at(exact.len() - TIE_DIGITS);
    let magnitude = if rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0') {
        round_up_last_digit(kept)
    } else {
        format!("{:.*}", decimals, n.abs())
    };
    let magnitude = magnitude.trim_end_matches('.');
    if n < 0.0 {
        format!("-{magnitude}")
    } else {
        magnitude.to_string()
    }
}

/// Add one unit in the last place of a decimal string, carrying left.
fn round_up_last_digit(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut i = bytes.len();
    while i > 0 {
        i -= 1;
        match bytes[i] {
            b'.' => {}
            b'9' => bytes[i] = b'0',
            d => {
                bytes[i] = d + 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    bytes.insert(0, b'1');
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Sum, product and average of the two numeric inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcReport {
    pub a: f64,
    pub b: f64,
    pub sum: f64,
    pub product: f64,
    pub average: f64,
}

impl CalcReport {
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            sum: add(a, b),
            product: multiply(a, b),
            average: average(a, b),
        }
    }
}

impl Report for CalcReport {
    fn rows(&self) -> Vec<Row> {
        vec![
            Row::new(
                "Numbers",
                format!("{} and {}", format_number(self.a), format_number(self.b)),
            ),
            Row::new("Sum", format_number(self.sum)),
            Row::new("Product", format_number(self.product)),
            Row::new("Average", format_fixed(self.average, 2)),
        ]
    }
}

/// Transformations and counts of the free-text input.
#[derive(Debug, Clone, PartialEq)]
pub struct TextReport {
    pub original: String,
    pub reversed: String,
    pub uppercase: String,
    pub word_count: usize,
    pub vowel_count: usize,
}

impl TextReport {
    pub fn new(input: &str) -> Self {
        Self {
            original: input.to_string(),
            reversed: reverse(input),
            uppercase: uppercase(input),
            word_count: word_count(input),
            vowel_count: vowel_count(input),
        }
    }
}

impl Report for TextReport {
    fn rows(&self) -> Vec<Row> {
        vec![
            Row::new("Original", format!("\"{}\"", self.original)),
            Row::new("Reversed", format!("\"{}\"", self.reversed)),
            Row::new("Uppercase", format!("\"{}\"", self.uppercase)),
            Row::new("Word Count", self.word_count.to_string()),
            Row::new("Vowel Count", self.vowel_count.to_string()),
        ]
    }
}

/// Output of one scope-demo invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeReport {
    pub local_variable: &'static str,
    pub counter: u64,
    pub current_time: String,
    pub add_example: f64,
}

impl Report for ScopeReport {
    fn rows(&self) -> Vec<Row> {
        vec![
            Row::new("Local Variable", self.local_variable),
            Row::new("Global Counter", self.counter.to_string()),
            Row::new("Current Time", self.current_time.clone()),
            Row::new(
                "Function Call",
                format!("add(5, 3) = {}", format_number(self.add_example)),
            ),
        ]
    }
}

/// Renders a report as `Label: value` lines.
pub struct Plain<'a, R: Report>(pub &'a R);

impl<R: Report> fmt::Display for Plain<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.rows() {
            writeln!(f, "{}: {}", row.label, row.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_number_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(1.25e30), "1.25e+30");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(3.5, 2), "3.50");
        assert_eq!(format_fixed(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_fixed(-0.0, 2), "0.00");
        assert_eq!(format_fixed(-0.001, 2), "-0.00");
        assert_eq!(format_fixed(2e21, 2), "2e+21");
    }

    #[test]
    fn test_format_fixed_ties_round_away_from_zero() {
        assert_eq!(format_fixed(0.625, 2), "0.63");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(-0.625, 2), "-0.63");
        assert_eq!(format_fixed(9.995, 2), "9.99");
        assert_eq!(format_fixed(0.5, 0), "1");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(9.5, 0), "10");
        // 1.005 sits just below the halfway point in binary.
        assert_eq!(format_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_calc_report_average_ties() {
        assert_eq!(CalcReport::new(1.0, 0.25).rows()[3].value, "0.63");
        assert_eq!(CalcReport::new(0.25, 0.0).rows()[3].value, "0.13");
        assert_eq!(CalcReport::new(-1.0, -0.25).rows()[3].value, "-0.63");
    }

    #[test]
    fn test_calc_report_extreme_magnitudes() {
        let report = CalcReport::new(1e21, 1e-7);
        assert_eq!(report.rows()[0].value, "1e+21 and 1e-7");
        assert_eq!(report.rows()[1].value, "1e+21");
    }

    #[test]
    fn test_calc_report_rows() {
        let report = CalcReport::new(4.0, 6.0);
        let rows = report.rows();
        assert_eq!(rows[0].value, "4 and 6");
        assert_eq!(rows[1], Row::new("Sum", "10"));
        assert_eq!(rows[2], Row::new("Product", "24"));
        assert_eq!(rows[3], Row::new("Average", "5.00"));
    }

    #[test]
    fn test_calc_report_infinity_times_zero() {
        let report = CalcReport::new(f64::INFINITY, 0.0);
        assert_eq!(report.rows()[2].value, "NaN");
    }

    #[test]
    fn test_text_report_rows() {
        let report = TextReport::new("  hello   world  ");
        assert_eq!(report.word_count, 2);
        assert_eq!(report.vowel_count, 3);
        let rows = report.rows();
        assert_eq!(rows[0].value, "\"  hello   world  \"");
        assert_eq!(rows[1].value, "\"  dlrow   olleh  \"");
        assert_eq!(rows[2].value, "\"  HELLO   WORLD  \"");
    }

    #[test]
    fn test_plain_rendering() {
        let report = CalcReport::new(1.0, 2.0);
        let text = Plain(&report).to_string();
        assert_eq!(
            text,
            "Numbers: 1 and 2\nSum: 3\nProduct: 2\nAverage: 1.50\n"
        );
    }
}
