//! Plain-text rendering of the derived views.

use cardlens_core::{display_amount, format_inr, CanonicalStatement};
use cardlens_finance::{AggregateStats, ChartData, UpcomingPayment};

pub fn summary(stats: &AggregateStats) -> String {
    let shown = stats.display();
    let mut out = String::new();
    out.push_str("# Portfolio summary\n\n");
    out.push_str(&format!(
        "Total statements: {} ({} with dues)\n",
        shown.statement_count, shown.valid_statement_count
    ));
    out.push_str(&format!("Total dues:       ₹{}\n", shown.total_dues));
    out.push_str(&format!("Min. amount due:  ₹{}\n", shown.total_min_due));
    out.push_str(&format!("Credit limit:     ₹{}\n", shown.total_credit_limit));
    out.push_str(&format!("Available credit: ₹{}\n", shown.total_available_credit));
    out.push_str(&format!("Avg. utilization: {}%\n", shown.avg_utilization));
    out
}

pub fn charts(charts: &ChartData) -> String {
    let mut out = String::new();

    out.push_str("## Total due vs minimum due by card\n\n");
    if charts.card_dues.is_empty() {
        out.push_str("(no statements with dues)\n");
    }
    for bar in &charts.card_dues {
        out.push_str(&format!(
            "- {} {} | total ₹{} | min ₹{}\n",
            bar.masked_card,
            bar.first_name_token,
            format_inr(bar.total_due),
            format_inr(bar.min_due)
        ));
    }

    out.push_str("\n## Total dues by issuer\n\n");
    let total: f64 = charts.issuer_distribution.iter().map(|s| s.total_value).sum();
    if charts.issuer_distribution.is_empty() {
        out.push_str("(no statements with dues)\n");
    }
    for slice in &charts.issuer_distribution {
        let share = if total > 0.0 { slice.total_value / total * 100.0 } else { 0.0 };
        out.push_str(&format!(
            "- {:<7} {} ₹{} ({:.0}%)\n",
            slice.issuer.label(),
            slice.issuer.color(),
            format_inr(slice.total_value),
            share
        ));
    }

    out.push_str("\n## Credit utilization by issuer\n\n");
    if charts.utilization.is_empty() {
        out.push_str("(no statements with a credit limit)\n");
    }
    for point in &charts.utilization {
        out.push_str(&format!(
            "- {:<7} {:.1}% | limit ₹{}K | available ₹{}K\n",
            point.issuer.label(),
            point.utilization,
            format_inr(point.credit_limit),
            format_inr(point.available_credit)
        ));
    }

    out
}

pub fn payments(payments: &[UpcomingPayment]) -> String {
    let mut out = String::new();
    out.push_str("# Upcoming payments\n\n");
    if payments.is_empty() {
        out.push_str("(no due dates)\n");
    }
    for p in payments {
        out.push_str(&format!(
            "- Due: {} | {} {} | {}\n",
            p.due_date, p.name, p.masked_card, p.amount
        ));
    }
    out
}

pub fn statements(statements: &[CanonicalStatement]) -> String {
    let mut out = String::new();
    out.push_str("# All statements\n\n");
    for s in statements {
        let issuer = s.issuer();
        let flag = if s.has_incomplete_data() { "  [incomplete]" } else { "" };
        out.push_str(&format!("[{}] {}{}\n", issuer.color(), issuer.display_name(), flag));
        out.push_str(&format!("  Name:           {}\n", s.name));
        out.push_str(&format!("  Email:          {}\n", s.email));
        out.push_str(&format!("  Address:        {}\n", s.address));
        out.push_str(&format!("  Statement Date: {}\n", s.statement_date));
        out.push_str(&format!("  Card:           **** **** **** {}\n", s.card_last4));
        out.push_str(&format!(
            "  Total Due:      {}   Minimum Due: {}\n",
            display_amount(&s.total_dues),
            display_amount(&s.minimum_amount_due)
        ));
        out.push_str(&format!("  Payment Due:    {}\n", s.payment_due_date));
        out.push_str(&format!(
            "  Credit Limit:   {}   Available: {}\n",
            display_amount(&s.credit_limit),
            display_amount(&s.available_credit_limit)
        ));
        out.push_str(&format!("  File:           {}\n\n", s.source_file));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardlens_core::{headers, normalize_all, RawRecord};
    use cardlens_finance::upcoming_payments;

    fn sample() -> Vec<CanonicalStatement> {
        let rows = vec![
            RawRecord::new()
                .with(headers::NAME, "ASHA VERMA")
                .with(headers::STATEMENT_DATE, "05/02/2025")
                .with(headers::CARD_LAST_4, "4821")
                .with(headers::PAYMENT_DUE_DATE, "25/02/2025")
                .with(headers::TOTAL_DUES, "₹1,23,456.00")
                .with(headers::CREDIT_LIMIT, "2,00,000")
                .with(headers::AVAILABLE_CREDIT_LIMIT, "76,544")
                .with(headers::FILE_NAME, "hdfc_feb.pdf"),
            RawRecord::new()
                .with(headers::NAME, "RAVI")
                .with(headers::TOTAL_DUES, "500.00")
                .with(headers::FILE_NAME, "misc.pdf"),
        ];
        normalize_all(&rows)
    }

    #[test]
    fn test_summary_uses_indian_grouping() {
        let text = summary(&AggregateStats::compute(&sample()));
        assert!(text.contains("Total dues:       ₹1,23,956"));
        assert!(text.contains("Total statements: 2 (2 with dues)"));
    }

    #[test]
    fn test_charts_sections() {
        let text = charts(&ChartData::build(&sample()));
        assert!(text.contains("****4821 ASHA"));
        assert!(text.contains("HDFC    #004C8F ₹1,23,456"));
        assert!(text.contains("61.7%"));
    }

    #[test]
    fn test_empty_charts_render_placeholders() {
        let text = charts(&ChartData::build(&[]));
        assert!(text.contains("(no statements with dues)"));
        assert!(text.contains("(no statements with a credit limit)"));
    }

    #[test]
    fn test_statement_cards() {
        let text = statements(&sample());
        assert!(text.contains("HDFC Bank\n"));
        assert!(text.contains("Credit Card  [incomplete]"));
        assert!(text.contains("Total Due:      ₹500.00"));
        assert!(text.contains("Minimum Due: ₹0.00"));
    }

    #[test]
    fn test_statement_cards_show_every_field() {
        let text = statements(&sample());
        assert!(text.contains("Address:        N/A"));
        assert!(text.contains("Credit Limit:   ₹2,00,000   Available: ₹76,544"));
        assert!(text.contains("File:           hdfc_feb.pdf"));
        assert!(text.contains("File:           misc.pdf"));
    }

    #[test]
    fn test_payments_list() {
        let text = payments(&upcoming_payments(&sample()));
        assert!(text.contains("- Due: 25/02/2025 | ASHA VERMA ****4821 | ₹1,23,456.00"));
        assert!(!text.contains("RAVI"));
    }
}
