//! Display formatting shared by every dashboard view.
//!
//! Numbers are rounded with Rust's `{:.N}` formatting, which rounds the exact
//! binary value: `0.8765` is stored as `0.87649999...` and renders `"0.876"`.

use chrono::{Local, NaiveDate};
use serde_json::Value;

/// Shown wherever a value is missing.
pub const PLACEHOLDER: &str = "\u{2014}";

/// `"R$ 12.50"`.
pub fn format_amount(currency_label: &str, amount: f64) -> String {
    format!("{} {:.2}", currency_label, amount)
}

/// Always three decimals.
pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

pub fn format_model(model: Option<&str>) -> String {
    match model {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Metric value policy:
/// - string with a leading number (`"0.91 (val)"`): that number, three decimals
/// - any other string: verbatim
/// - number: three decimals
/// - null, object, array, bool or missing: placeholder
pub fn format_metric(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => match leading_number(s) {
            Some(f) => format_score(f),
            None => s.clone(),
        },
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) => format_score(f),
            None => n.to_string(),
        },
        _ => PLACEHOLDER.to_string(),
    }
}

/// Counts (e.g. the training set size) are shown as received. A whole float
/// such as `800.0` prints without the fraction.
pub fn format_count(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.is_f64() => match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
            _ => n.to_string(),
        },
        Some(Value::Number(n)) => n.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Lenient amount parsing: blank, unparseable or non-finite input is zero.
/// A decimal comma is accepted, and trailing text after a number is ignored.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    parse_finite(trimmed)
        .or_else(|| parse_finite(&trimmed.replace(',', ".")))
        .or_else(|| leading_number(trimmed))
        .unwrap_or(0.0)
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

/// The longest numeric prefix of `s` (sign, digits, fraction, exponent),
/// ignoring leading whitespace. `None` when there is no digit to read or the
/// value is not finite, so `"NaN"` and `"Infinity"` do not count.
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    parse_finite(&s[..end])
}

/// `YYYY-MM-DD`, zero padded.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today_local() -> String {
    format_date(Local::now().date_naive())
}

/// Keep a filled date input, otherwise fall back to `today`.
pub fn date_or(value: &str, today: &str) -> String {
    if value.trim().is_empty() {
        today.to_string()
    } else {
        value.to_string()
    }
}
