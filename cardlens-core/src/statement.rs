//! Statement record types: the raw header-keyed rows handed over by the
//! extractor, and the canonical form every downstream projection consumes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::issuer::Issuer;

/// Header names produced by the upstream extractor.
pub mod headers {
    pub const NAME: &str = "Name";
    pub const EMAIL: &str = "Email";
    pub const ADDRESS: &str = "Address";
    pub const STATEMENT_DATE: &str = "Statement Date";
    pub const CARD_LAST_4: &str = "Card Last 4 Digits";
    pub const PAYMENT_DUE_DATE: &str = "Payment Due Date";
    pub const TOTAL_DUES: &str = "Total Dues";
    pub const MINIMUM_AMOUNT_DUE: &str = "Minimum Amount Due";
    pub const CREDIT_LIMIT: &str = "Credit Limit";
    pub const AVAILABLE_CREDIT_LIMIT: &str = "Available Credit Limit";
    pub const FILE_NAME: &str = "File Name";

    /// All headers in extractor column order.
    pub const ALL: [&str; 11] = [
        NAME,
        EMAIL,
        ADDRESS,
        STATEMENT_DATE,
        CARD_LAST_4,
        PAYMENT_DUE_DATE,
        TOTAL_DUES,
        MINIMUM_AMOUNT_DUE,
        CREDIT_LIMIT,
        AVAILABLE_CREDIT_LIMIT,
        FILE_NAME,
    ];
}

/// Placeholder for missing text, date and card fields.
pub const NOT_AVAILABLE: &str = "N/A";
/// Default for missing due amounts.
pub const ZERO_DUES: &str = "0.00";
/// Default for missing credit limits.
pub const ZERO_LIMIT: &str = "0";

/// One row of extractor output, keyed by header name. Nothing is guaranteed:
/// any header may be absent, blank or garbled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord(BTreeMap<String, String>);

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.0.get(header).map(String::as_str)
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.0.insert(header.into(), value.into());
    }

    /// Builder-style insert, handy for fixtures.
    pub fn with(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(header, value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A normalized credit-card statement. Every field is present; missing
/// source values have already been replaced by their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalStatement {
    pub name: String,
    pub email: String,
    pub address: String,
    /// `DD/MM/YYYY` or `N/A`
    pub statement_date: String,
    /// Four digits or `N/A`
    pub card_last4: String,
    /// `DD/MM/YYYY` or `N/A`
    pub payment_due_date: String,
    /// Display string as extracted, e.g. `₹12,345.00`
    pub total_dues: String,
    pub minimum_amount_due: String,
    pub credit_limit: String,
    pub available_credit_limit: String,
    /// Extractor input file; drives issuer inference
    pub source_file: String,
}

impl CanonicalStatement {
    pub fn issuer(&self) -> Issuer {
        Issuer::classify(&self.source_file)
    }

    /// True when the statement carries a due amount and so takes part in
    /// monetary sums and chart series.
    pub fn is_valid(&self) -> bool {
        is_present(&self.total_dues, ZERO_DUES)
    }

    /// True when the statement carries a credit limit usable for utilization.
    pub fn has_credit_limit(&self) -> bool {
        is_present(&self.credit_limit, ZERO_LIMIT)
    }

    pub fn has_due_date(&self) -> bool {
        is_present(&self.payment_due_date, NOT_AVAILABLE)
    }

    /// Statement date or card digits could not be extracted.
    pub fn has_incomplete_data(&self) -> bool {
        self.statement_date == NOT_AVAILABLE || self.card_last4 == NOT_AVAILABLE
    }

    /// `****` followed by the last four card digits.
    pub fn masked_card(&self) -> String {
        format!("****{}", self.card_last4)
    }

    /// Name up to the first whitespace.
    pub fn first_name_token(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(NOT_AVAILABLE)
    }
}

fn is_present(value: &str, zero_default: &str) -> bool {
    !value.is_empty() && value != zero_default && value != NOT_AVAILABLE
}
