//! Field normalization: raw extractor rows into canonical statements.

use regex::Regex;
use std::sync::LazyLock;

use crate::statement::{
    headers, CanonicalStatement, RawRecord, NOT_AVAILABLE, ZERO_DUES, ZERO_LIMIT,
};

// The extractor sometimes glues the "Email" label onto the name field.
static EMAIL_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*email\s*").expect("static pattern"));

// Placeholder the extractor writes when it lost track of the input file.
const UNKNOWN_SOURCE: &str = "Unknown";

/// Normalize one raw row. Returns `None` when the row has no usable source
/// file (missing, blank or `Unknown`), since issuer inference needs one.
pub fn normalize(raw: &RawRecord) -> Option<CanonicalStatement> {
    let source_file = raw
        .get(headers::FILE_NAME)
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != UNKNOWN_SOURCE)?;

    let name = raw
        .get(headers::NAME)
        .map(|n| EMAIL_LABEL.replace_all(n, "").into_owned());

    Some(CanonicalStatement {
        name: or_default(name.as_deref(), NOT_AVAILABLE),
        email: field(raw, headers::EMAIL, NOT_AVAILABLE),
        address: field(raw, headers::ADDRESS, NOT_AVAILABLE),
        statement_date: field(raw, headers::STATEMENT_DATE, NOT_AVAILABLE),
        card_last4: field(raw, headers::CARD_LAST_4, NOT_AVAILABLE),
        payment_due_date: field(raw, headers::PAYMENT_DUE_DATE, NOT_AVAILABLE),
        total_dues: field(raw, headers::TOTAL_DUES, ZERO_DUES),
        minimum_amount_due: field(raw, headers::MINIMUM_AMOUNT_DUE, ZERO_DUES),
        credit_limit: field(raw, headers::CREDIT_LIMIT, ZERO_LIMIT),
        available_credit_limit: field(raw, headers::AVAILABLE_CREDIT_LIMIT, ZERO_LIMIT),
        source_file: source_file.to_string(),
    })
}

/// Normalize a whole payload, dropping rows without a source file.
/// Input order is preserved.
pub fn normalize_all(raws: &[RawRecord]) -> Vec<CanonicalStatement> {
    let statements: Vec<_> = raws.iter().filter_map(normalize).collect();

    let dropped = raws.len() - statements.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = statements.len(), "dropped rows without a source file");
    }

    statements
}

fn field(raw: &RawRecord, header: &str, default: &str) -> String {
    or_default(raw.get(header), default)
}

fn or_default(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
