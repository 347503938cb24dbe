//! Parse delimiter-separated extractor output into header-keyed rows.
//!
//! Expected header row (column order is not significant):
//!   Name,Email,Address,Statement Date,Card Last 4 Digits,Payment Due Date,
//!   Total Dues,Minimum Amount Due,Credit Limit,Available Credit Limit,File Name

use cardlens_core::RawRecord;

use crate::error::SourceUnavailable;

/// Parse a payload into raw rows keyed by header.
///
/// Rows may be shorter than the header (missing trailing cells are simply
/// absent). Rows where every cell is blank are skipped. An empty payload
/// yields no rows.
pub fn parse_payload(text: &str, delimiter: u8) -> Result<Vec<RawRecord>, SourceUnavailable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .delimiter(delimiter)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let row: RawRecord = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .collect();
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "parsed statement payload");
    Ok(rows)
}
