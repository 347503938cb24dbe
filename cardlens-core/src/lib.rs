//! cardlens-core: statement model, issuer classification and field normalization

pub mod amount;
pub mod display;
pub mod issuer;
pub mod normalize;
pub mod statement;

pub use amount::{parse_amount, round1, utilization_percent};
pub use display::{display_amount, format_inr};
pub use issuer::Issuer;
pub use normalize::{normalize, normalize_all};
pub use statement::{headers, CanonicalStatement, RawRecord, NOT_AVAILABLE, ZERO_DUES, ZERO_LIMIT};
