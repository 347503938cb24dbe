use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the extractor's tabular output comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementSource {
    /// Remote extractor. `parse_url`, when set, is requested first to make
    /// the extractor regenerate its output before `csv_url` is fetched.
    Url {
        csv_url: String,
        parse_url: Option<String>,
    },
    /// A locally supplied file of the same shape
    File(PathBuf),
}

impl StatementSource {
    pub fn url(csv_url: impl Into<String>) -> Self {
        StatementSource::Url {
            csv_url: csv_url.into(),
            parse_url: None,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        StatementSource::File(path.into())
    }

    /// Request `parse_url` before fetching (remote sources only).
    pub fn with_parse_trigger(self, parse_url: impl Into<String>) -> Self {
        match self {
            StatementSource::Url { csv_url, .. } => StatementSource::Url {
                csv_url,
                parse_url: Some(parse_url.into()),
            },
            other => other,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            StatementSource::Url { csv_url, .. } => csv_url.clone(),
            StatementSource::File(path) => path.display().to_string(),
        }
    }
}

/// Reply body of the extractor's parse endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ParseReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub csv_file: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
