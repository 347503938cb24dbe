//! Portfolio-level aggregates over a canonical statement set.

use cardlens_core::{format_inr, parse_amount, round1, utilization_percent, CanonicalStatement};
use serde::{Deserialize, Serialize};

/// Sums and utilization over the valid statements of a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub total_dues: f64,
    pub total_min_due: f64,
    pub total_credit_limit: f64,
    pub total_available_credit: f64,
    /// Drawn share of the summed limits, one decimal place
    pub avg_utilization_percent: f64,
    /// Every statement in the set
    pub statement_count: usize,
    /// Statements carrying a due amount; only these enter the sums
    pub valid_statement_count: usize,
}

/// [`AggregateStats`] rendered for display, sums in en-IN grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDisplay {
    pub total_dues: String,
    pub total_min_due: String,
    pub total_credit_limit: String,
    pub total_available_credit: String,
    pub avg_utilization: String,
    pub statement_count: usize,
    pub valid_statement_count: usize,
}

impl AggregateStats {
    pub fn compute(statements: &[CanonicalStatement]) -> Self {
        let valid: Vec<&CanonicalStatement> = statements.iter().filter(|s| s.is_valid()).collect();

        let total_dues = sum_field(&valid, |s| &s.total_dues);
        let total_min_due = sum_field(&valid, |s| &s.minimum_amount_due);
        let total_credit_limit = sum_field(&valid, |s| &s.credit_limit);
        let total_available_credit = sum_field(&valid, |s| &s.available_credit_limit);

        Self {
            total_dues,
            total_min_due,
            total_credit_limit,
            total_available_credit,
            avg_utilization_percent: round1(utilization_percent(
                total_credit_limit,
                total_available_credit,
            )),
            statement_count: statements.len(),
            valid_statement_count: valid.len(),
        }
    }

    pub fn display(&self) -> StatsDisplay {
        StatsDisplay {
            total_dues: format_inr(self.total_dues),
            total_min_due: format_inr(self.total_min_due),
            total_credit_limit: format_inr(self.total_credit_limit),
            total_available_credit: format_inr(self.total_available_credit),
            avg_utilization: format!("{:.1}", self.avg_utilization_percent),
            statement_count: self.statement_count,
            valid_statement_count: self.valid_statement_count,
        }
    }
}

fn sum_field(statements: &[&CanonicalStatement], field: impl Fn(&CanonicalStatement) -> &String) -> f64 {
    statements.iter().map(|s| parse_amount(field(*s))).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardlens_core::{headers, normalize, RawRecord};

    fn stmt(total: &str, min: &str, limit: &str, available: &str, file: &str) -> CanonicalStatement {
        let raw = RawRecord::new()
            .with(headers::TOTAL_DUES, total)
            .with(headers::MINIMUM_AMOUNT_DUE, min)
            .with(headers::CREDIT_LIMIT, limit)
            .with(headers::AVAILABLE_CREDIT_LIMIT, available)
            .with(headers::FILE_NAME, file);
        normalize(&raw).unwrap()
    }

    #[test]
    fn test_empty_set() {
        let stats = AggregateStats::compute(&[]);
        assert_eq!(stats.statement_count, 0);
        assert_eq!(stats.valid_statement_count, 0);
        assert_eq!(stats.avg_utilization_percent, 0.0);
        assert_eq!(stats.total_dues, 0.0);
    }

    #[test]
    fn test_sums_only_valid_statements() {
        let set = vec![
            stmt("₹1,000.00", "₹50.00", "10,000", "7,500", "icici_feb.pdf"),
            stmt("₹2,500.50", "₹125.00", "50,000", "40,000", "hdfc_feb.pdf"),
            // no dues: counted, not summed
            stmt("", "", "1,00,000", "0", "sbi_feb.pdf"),
            stmt("N/A", "", "20,000", "0", "axis_feb.pdf"),
        ];

        let stats = AggregateStats::compute(&set);
        assert_eq!(stats.statement_count, 4);
        assert_eq!(stats.valid_statement_count, 2);
        assert_eq!(stats.total_dues, 3500.5);
        assert_eq!(stats.total_min_due, 175.0);
        assert_eq!(stats.total_credit_limit, 60000.0);
        assert_eq!(stats.total_available_credit, 47500.0);
        // (60000 - 47500) / 60000 = 20.83..%
        assert_eq!(stats.avg_utilization_percent, 20.8);
    }

    #[test]
    fn test_zero_limit_gives_zero_utilization() {
        let set = vec![stmt("₹500.00", "₹25.00", "", "", "kotak.pdf")];
        let stats = AggregateStats::compute(&set);
        assert_eq!(stats.total_credit_limit, 0.0);
        assert_eq!(stats.avg_utilization_percent, 0.0);
        assert!(stats.avg_utilization_percent.is_finite());
    }

    #[test]
    fn test_utilization_within_bounds() {
        let set = vec![
            stmt("₹1.00", "", "10,000", "10,000", "a.pdf"),
            stmt("₹1.00", "", "5,000", "0", "b.pdf"),
            stmt("₹1.00", "", "25,000", "12,345", "c.pdf"),
        ];
        let pct = AggregateStats::compute(&set).avg_utilization_percent;
        assert!((0.0..=100.0).contains(&pct), "utilization out of range: {pct}");
    }

    #[test]
    fn test_garbled_amounts_degrade_to_zero() {
        let set = vec![stmt("₹abc", "xyz", "lots", "??", "canara.pdf")];
        let stats = AggregateStats::compute(&set);
        // "₹abc" is a present due string, so the statement is valid but adds 0
        assert_eq!(stats.valid_statement_count, 1);
        assert_eq!(stats.total_dues, 0.0);
        assert_eq!(stats.avg_utilization_percent, 0.0);
    }

    #[test]
    fn test_overflowing_limits_keep_utilization_finite() {
        let set = vec![
            stmt("₹1.00", "", "1e308", "0", "hdfc.pdf"),
            stmt("₹1.00", "", "1e308", "0", "sbi.pdf"),
        ];
        let stats = AggregateStats::compute(&set);
        assert!(stats.total_credit_limit.is_infinite());
        assert_eq!(stats.avg_utilization_percent, 0.0);
        assert_eq!(stats.display().avg_utilization, "0.0");
    }

    #[test]
    fn test_display_uses_indian_grouping() {
        let set = vec![stmt("₹12,34,567.50", "₹1,000.00", "20,00,000", "7,65,432", "hdfc.pdf")];
        let shown = AggregateStats::compute(&set).display();
        assert_eq!(shown.total_dues, "12,34,567.5");
        assert_eq!(shown.total_min_due, "1,000");
        assert_eq!(shown.total_credit_limit, "20,00,000");
        assert_eq!(shown.avg_utilization, "61.7");
    }
}
