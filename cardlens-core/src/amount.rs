//! Lenient parsing of locale-formatted amounts (`₹1,23,456.00`, `10,000`).
//!
//! Malformed or missing values degrade to zero so every projection stays
//! renderable.

use crate::statement::NOT_AVAILABLE;

const RUPEE: char = '₹';

/// Parse an amount string into a finite number.
///
/// Strips the rupee glyph, comma separators and whitespace, then parses what
/// remains. Empty input, `N/A`, unparsable text and non-finite results all
/// yield `0.0`. Negative values pass through.
pub fn parse_amount(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() || raw == NOT_AVAILABLE {
        return 0.0;
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| *c != RUPEE && *c != ',' && !c.is_whitespace())
        .collect();

    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage of `limit` already drawn. Zero when the limit is not positive
/// or when either input or the result is not finite.
pub fn utilization_percent(limit: f64, available: f64) -> f64 {
    if limit > 0.0 && limit.is_finite() && available.is_finite() {
        let pct = (limit - available) / limit * 100.0;
        if pct.is_finite() {
            return pct;
        }
    }
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rupee_grouped() {
        assert_eq!(parse_amount("₹1,234.50"), 1234.50);
        assert_eq!(parse_amount("₹ 1,23,456.00"), 123456.0);
    }

    #[test]
    fn test_parse_plain_and_grouped() {
        assert_eq!(parse_amount("10,000"), 10000.0);
        assert_eq!(parse_amount("  7500 "), 7500.0);
    }

    #[test]
    fn test_missing_values_are_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("N/A"), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
    }

    #[test]
    fn test_garbled_values_are_zero() {
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("₹"), 0.0);
        assert_eq!(parse_amount("1.2.3"), 0.0);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("-infinity"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn test_negative_passes_through() {
        assert_eq!(parse_amount("-250.75"), -250.75);
    }

    #[test]
    fn test_utilization_zero_guard() {
        assert_eq!(utilization_percent(0.0, 0.0), 0.0);
        assert_eq!(utilization_percent(10000.0, 7500.0), 25.0);
        assert_eq!(round1(33.333), 33.3);
    }

    #[test]
    fn test_utilization_non_finite_inputs() {
        assert_eq!(utilization_percent(f64::INFINITY, 5.0), 0.0);
        assert_eq!(utilization_percent(1000.0, f64::INFINITY), 0.0);
        assert_eq!(utilization_percent(1000.0, f64::NAN), 0.0);
        assert_eq!(utilization_percent(f64::MIN_POSITIVE, -f64::MAX), 0.0);
    }
}
