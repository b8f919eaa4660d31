//! Cell formatting shared by all report builders.
//!
//! Report rows arrive as loosely typed JSON, so every function here accepts an
//! `Option<&Value>` and resolves missing, null, or non-numeric inputs locally
//! instead of failing.  Non-numeric values in numeric fields pass through as
//! their raw string form.

use num_format::{Locale, ToFormattedString};
use serde_json::Value;

/// Attempts to read the value as a number, accepting numeric strings as well.
///
/// Strings that parse to a non-finite float (`"NaN"`, `"inf"`) are treated as
/// non-numeric so they pass through instead of rendering as a bogus number.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Raw string form of a value: strings unquoted, everything else as JSON.
fn display_raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Groups a string of ASCII digits into thousands, e.g. `"1234567"` to
/// `"1,234,567"`.  Values within `u128` range go through `num_format`; wider
/// integer parts (an `f64` reaches ~1.8e308) fall back to chunking the digits
/// directly.
fn group_int_digits(digits: &str) -> String {
    if let Ok(int) = digits.parse::<u128>() {
        return int.to_formatted_string(&Locale::en);
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Fixed-point rendering with grouped thousands in the integer part.
fn group_fixed(n: f64, decimals: usize) -> String {
    let neg = n.is_sign_negative();
    let s = format!("{:.*}", decimals, n.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (s.as_str(), None),
    };
    let mut out = group_int_digits(int_part);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    if neg {
        format!("-{out}")
    } else {
        out
    }
}

/// Renders a value as a grouped-thousands number at the given precision.
///
/// Missing and null values render as the empty string; values that fail
/// numeric coercion pass through unchanged.
pub fn format_number(value: Option<&Value>, precision: usize) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if value.is_null() {
        return String::new();
    }
    match coerce_number(value) {
        Some(n) => group_fixed(n, precision),
        None => display_raw(value),
    }
}

/// Renders a fraction as a percentage string, e.g. `0.1234` to `"12.34%"`.
pub fn format_percent(value: Option<&Value>, precision: usize) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if value.is_null() {
        return String::new();
    }
    match coerce_number(value) {
        Some(n) => format!("{:.*}%", precision, n * 100.0),
        None => display_raw(value),
    }
}

/// Orders variant of [`format_number`]: with `percent` set, the value is
/// already expressed in percent units and renders as `"{value:.1}%"` instead
/// of the grouped-integer form.
pub fn format_number_or_percent(value: Option<&Value>, percent: bool) -> String {
    if !percent {
        return format_number(value, 0);
    }
    let Some(value) = value else {
        return String::new();
    };
    if value.is_null() {
        return String::new();
    }
    match coerce_number(value) {
        Some(n) => format!("{n:.1}%"),
        None => display_raw(value),
    }
}

/// Renders a placeholder field: missing, null, and empty values all show as
/// a hyphen, anything else passes through unchanged.
pub fn placeholder(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) if s.is_empty() => "-".to_string(),
        Some(other) => display_raw(other),
    }
}

/// Renders a value as-is, with missing and null degrading to the empty string.
pub fn raw_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(other) => display_raw(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_handles_missing_and_null() {
        assert_eq!(format_number(None, 0), "");
        assert_eq!(format_number(Some(&Value::Null), 0), "");
    }

    #[test]
    fn number_groups_thousands() {
        assert_eq!(format_number(Some(&json!(1000)), 0), "1,000");
        assert_eq!(format_number(Some(&json!(54321)), 0), "54,321");
        assert_eq!(format_number(Some(&json!(8)), 0), "8");
    }

    #[test]
    fn number_with_precision_is_fixed_point() {
        assert_eq!(format_number(Some(&json!(1000.5)), 2), "1,000.50");
        assert_eq!(format_number(Some(&json!(2.5)), 2), "2.50");
        assert_eq!(format_number(Some(&json!(12.345)), 2), "12.35");
    }

    #[test]
    fn number_rounds_fractions_at_zero_precision() {
        assert_eq!(format_number(Some(&json!(1234.6)), 0), "1,235");
    }

    #[test]
    fn number_accepts_numeric_strings() {
        assert_eq!(format_number(Some(&json!("1500")), 0), "1,500");
    }

    #[test]
    fn number_passes_non_numeric_through() {
        assert_eq!(format_number(Some(&json!("abc")), 0), "abc");
    }

    #[test]
    fn number_keeps_sign() {
        assert_eq!(format_number(Some(&json!(-1234)), 0), "-1,234");
    }

    #[test]
    fn number_groups_values_beyond_i64_range() {
        assert_eq!(
            format_number(Some(&json!(1.0e19)), 0),
            "10,000,000,000,000,000,000"
        );
    }

    #[test]
    fn number_groups_values_beyond_u128_range() {
        // 2^130 is exactly representable as an f64 and wider than u128.
        assert_eq!(
            format_number(Some(&json!(2.0f64.powi(130))), 0),
            "1,361,129,467,683,753,853,853,498,429,727,072,845,824"
        );
    }

    #[test]
    fn number_passes_non_finite_strings_through() {
        assert_eq!(format_number(Some(&json!("NaN")), 0), "NaN");
        assert_eq!(format_number(Some(&json!("inf")), 0), "inf");
        assert_eq!(format_number(Some(&json!("-inf")), 2), "-inf");
    }

    #[test]
    fn percent_scales_fractions() {
        assert_eq!(format_percent(Some(&json!(0.1234)), 2), "12.34%");
        assert_eq!(format_percent(Some(&json!(0.18)), 2), "18.00%");
        assert_eq!(format_percent(None, 2), "");
        assert_eq!(format_percent(Some(&json!("n/a")), 2), "n/a");
    }

    #[test]
    fn number_or_percent_flag() {
        assert_eq!(format_number_or_percent(Some(&json!(12.34)), true), "12.3%");
        assert_eq!(
            format_number_or_percent(Some(&json!(54321)), false),
            "54,321"
        );
        assert_eq!(format_number_or_percent(None, true), "");
    }

    #[test]
    fn placeholder_collapses_empty_values() {
        assert_eq!(placeholder(None), "-");
        assert_eq!(placeholder(Some(&Value::Null)), "-");
        assert_eq!(placeholder(Some(&json!(""))), "-");
        assert_eq!(placeholder(Some(&json!("Latte"))), "Latte");
        assert_eq!(placeholder(Some(&json!(42))), "42");
    }

    #[test]
    fn raw_text_degrades_to_empty() {
        assert_eq!(raw_text(None), "");
        assert_eq!(raw_text(Some(&Value::Null)), "");
        assert_eq!(raw_text(Some(&json!("Gangnam"))), "Gangnam");
        assert_eq!(raw_text(Some(&json!(10))), "10");
        assert_eq!(raw_text(Some(&json!(1.5))), "1.5");
    }
}
