//! cardlens-finance: portfolio aggregates, chart series and the payment schedule

pub mod charts;
pub mod schedule;
pub mod stats;

pub use charts::{card_dues, issuer_distribution, utilization_series, CardDues, ChartData, IssuerTotal, UtilizationPoint};
pub use schedule::{due_date_key, upcoming_payments, UpcomingPayment};
pub use stats::{AggregateStats, StatsDisplay};
