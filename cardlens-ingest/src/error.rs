use std::path::PathBuf;
use thiserror::Error;

/// The statement source could not deliver a usable payload.
///
/// This is the only failure the pipeline surfaces; per-field defects are
/// absorbed by normalization. Callers may retry by re-running the load.
#[derive(Error, Debug)]
pub enum SourceUnavailable {
    #[error("could not reach statement source {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("statement source {url} returned {status}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },
    #[error("could not read statement file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed statement payload: {0}")]
    Malformed(#[from] csv::Error),
}
