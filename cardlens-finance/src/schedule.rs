//! Upcoming payments ordered by due date.
//!
//! Due dates come straight from the extractor as `DD/MM/YYYY`. Anything that
//! does not parse sorts first rather than failing the whole schedule.

use cardlens_core::CanonicalStatement;
use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// One row of the due-payment list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingPayment {
    pub name: String,
    pub masked_card: String,
    pub due_date: String,
    /// Total dues exactly as extracted, for display
    pub amount: String,
}

/// Sort key for a `DD/MM/YYYY` due date. `None` (malformed) orders before
/// every real date.
///
/// Out-of-range day or month values roll over into the following period, so
/// `31/02/2025` is 3 March 2025 and `00/03/2025` is the last day of February.
pub fn due_date_key(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.split('/').map(str::trim).collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };

    let day: i64 = day.parse().ok()?;
    let month: i64 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;

    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let month_offset = month.checked_sub(1)?;
    let months = Months::new(u32::try_from(month_offset.unsigned_abs()).ok()?);
    let shifted = if month_offset >= 0 {
        start.checked_add_months(months)?
    } else {
        start.checked_sub_months(months)?
    };
    shifted.checked_add_signed(Duration::try_days(day.checked_sub(1)?)?)
}

/// Statements with a due date, earliest first. Ties keep input order.
pub fn upcoming_payments(statements: &[CanonicalStatement]) -> Vec<UpcomingPayment> {
    let mut keyed: Vec<(Option<NaiveDate>, UpcomingPayment)> = statements
        .iter()
        .filter(|s| s.has_due_date())
        .map(|s| {
            let payment = UpcomingPayment {
                name: s.name.clone(),
                masked_card: s.masked_card(),
                due_date: s.payment_due_date.clone(),
                amount: s.total_dues.clone(),
            };
            (due_date_key(&s.payment_due_date), payment)
        })
        .collect();

    // stable: equal dates stay in input order
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, payment)| payment).collect()
}
