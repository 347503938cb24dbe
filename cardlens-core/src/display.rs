//! Display helpers for the presentation layer: en-IN digit grouping and
//! rupee-prefixed amounts.

use crate::statement::{NOT_AVAILABLE, ZERO_DUES};

/// Format a number with Indian digit grouping (`12,34,567.5`).
///
/// At most three fraction digits are kept; trailing zeros are dropped.
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

// Last three digits, then pairs: 1234567 -> 12,34,567
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Render an extracted amount string with a single leading `₹`.
/// Missing or zero amounts render as `₹0.00`.
pub fn display_amount(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw == NOT_AVAILABLE || raw == ZERO_DUES {
        return "₹0.00".to_string();
    }

    let rest = raw.strip_prefix('₹').unwrap_or(raw);
    let rest = rest.strip_prefix(char::is_whitespace).unwrap_or(rest);
    format!("₹{rest}")
}
