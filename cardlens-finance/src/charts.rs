//! Chart projections: per-card dues, per-issuer distribution and
//! per-statement credit utilization.
//!
//! Each builder is a pure function of the canonical set and is recomputed on
//! every render.

use cardlens_core::{parse_amount, round1, utilization_percent, CanonicalStatement, Issuer};
use serde::{Deserialize, Serialize};

/// Bar chart entry: total vs minimum due for one card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDues {
    pub first_name_token: String,
    pub masked_card: String,
    pub total_due: f64,
    pub min_due: f64,
}

/// Pie chart slice: summed dues for one issuer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerTotal {
    pub issuer: Issuer,
    pub total_value: f64,
}

/// Line chart point for one statement. Credit figures are in thousands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationPoint {
    pub issuer: Issuer,
    pub utilization: f64,
    pub credit_limit: f64,
    pub available_credit: f64,
}

/// One bar entry per valid statement, in input order.
pub fn card_dues(statements: &[CanonicalStatement]) -> Vec<CardDues> {
    statements
        .iter()
        .filter(|s| s.is_valid())
        .map(|s| CardDues {
            first_name_token: s.first_name_token().to_string(),
            masked_card: s.masked_card(),
            total_due: parse_amount(&s.total_dues),
            min_due: parse_amount(&s.minimum_amount_due),
        })
        .collect()
}

/// Valid statements grouped by issuer with dues summed. Slices appear in
/// the order each issuer is first seen.
pub fn issuer_distribution(statements: &[CanonicalStatement]) -> Vec<IssuerTotal> {
    let mut slices: Vec<IssuerTotal> = Vec::new();

    for s in statements.iter().filter(|s| s.is_valid()) {
        let issuer = s.issuer();
        let amount = parse_amount(&s.total_dues);
        match slices.iter_mut().find(|slice| slice.issuer == issuer) {
            Some(slice) => slice.total_value += amount,
            None => slices.push(IssuerTotal {
                issuer,
                total_value: amount,
            }),
        }
    }

    slices
}

/// One point per statement with a usable credit limit. Statements sharing an
/// issuer are not merged, unlike [`issuer_distribution`].
pub fn utilization_series(statements: &[CanonicalStatement]) -> Vec<UtilizationPoint> {
    statements
        .iter()
        .filter(|s| s.has_credit_limit())
        .map(|s| {
            let limit = parse_amount(&s.credit_limit);
            let available = parse_amount(&s.available_credit_limit);
            UtilizationPoint {
                issuer: s.issuer(),
                utilization: round1(utilization_percent(limit, available)),
                credit_limit: limit / 1000.0,
                available_credit: available / 1000.0,
            }
        })
        .collect()
}

/// All three chart series for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub card_dues: Vec<CardDues>,
    pub issuer_distribution: Vec<IssuerTotal>,
    pub utilization: Vec<UtilizationPoint>,
}

impl ChartData {
    pub fn build(statements: &[CanonicalStatement]) -> Self {
        Self {
            card_dues: card_dues(statements),
            issuer_distribution: issuer_distribution(statements),
            utilization: utilization_series(statements),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.card_dues.is_empty() && self.issuer_distribution.is_empty() && self.utilization.is_empty()
    }
}
