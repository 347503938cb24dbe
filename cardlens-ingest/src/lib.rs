//! cardlens-ingest: statement source fetching and payload parsing (CSV over HTTP or local file).

pub mod error;
pub mod payload;
pub mod source;
pub mod types;

pub use error::SourceUnavailable;
pub use payload::parse_payload;
pub use source::{load_statements, StatementLoader};
pub use types::StatementSource;
