//! Amount parsing for raw user input and Indian-style currency formatting.

use crate::CoreError;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Rupee formatter using lakh/crore digit grouping and no fraction digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndianRupeeFormatter {
    pub hide_symbol: bool,
}

impl IndianRupeeFormatter {
    pub fn plain() -> Self {
        Self { hide_symbol: true }
    }
}

impl CurrencyFormatter for IndianRupeeFormatter {
    fn format_amount(&self, amount: f64) -> String {
        format_inr(amount, self.hide_symbol)
    }
}

/// Formats `amount` as `₹12,34,567`, or `12,34,567` when `hide_symbol` is set.
pub fn format_inr(amount: f64, hide_symbol: bool) -> String {
    let symbol = if hide_symbol { "" } else { "₹" };
    if !amount.is_finite() {
        return format!("{symbol}{amount}");
    }
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}{symbol}{}", group_indian(&digits))
}

/// Last three digits form one group, the rest are grouped in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Coerces raw amount input to a non-negative number.
///
/// Every character other than digits and `.` is discarded, then the longest
/// numeric prefix is parsed. Anything unparseable becomes `0`.
pub fn parse_amount(raw: &str) -> f64 {
    let mut cleaned = String::with_capacity(raw.len());
    let mut seen_dot = false;
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            cleaned.push(ch);
        } else if ch == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
            cleaned.push(ch);
        }
    }
    finite_or_zero(cleaned.parse::<f64>().ok())
}

/// Coerces raw percentage input, keeping its sign. Unparseable input becomes `0`.
pub fn parse_percent(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let parsed = trimmed
        .char_indices()
        .map(|(idx, ch)| idx + ch.len_utf8())
        .rev()
        .find_map(|end| trimmed[..end].parse::<f64>().ok().filter(|v| v.is_finite()));
    finite_or_zero(parsed)
}

/// Rejects NaN and infinities, which cannot be persisted as JSON numbers.
pub fn require_finite(field: &str, value: f64) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::Validation(format!("{field} must be a finite number, got {value}")))
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
