//! Fetch extractor output and run it through normalization.
//!
//! The fetch and the parse are one-shot and strictly sequential: the
//! optional parse trigger completes before the CSV is requested, and parsing
//! starts only once the whole payload is in memory.

use cardlens_core::{normalize_all, CanonicalStatement, RawRecord};

use crate::error::SourceUnavailable;
use crate::payload::parse_payload;
use crate::types::{ParseReply, StatementSource};

/// Loads statements from a [`StatementSource`].
#[derive(Debug, Clone)]
pub struct StatementLoader {
    http: reqwest::Client,
    delimiter: u8,
}

impl Default for StatementLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementLoader {
    pub fn new() -> Self {
        Self::with_http_client(reqwest::Client::new())
    }

    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self {
            http,
            delimiter: b',',
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Fetch the raw payload text.
    pub async fn fetch_payload(&self, source: &StatementSource) -> Result<String, SourceUnavailable> {
        match source {
            StatementSource::Url { csv_url, parse_url } => {
                if let Some(parse_url) = parse_url {
                    self.trigger_parse(parse_url).await?;
                }
                self.get_text(csv_url).await
            }
            StatementSource::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|source| SourceUnavailable::Read {
                    path: path.clone(),
                    source,
                }),
        }
    }

    /// Fetch, then parse into header-keyed rows.
    pub async fn load_raw_records(&self, source: &StatementSource) -> Result<Vec<RawRecord>, SourceUnavailable> {
        let payload = self.fetch_payload(source).await?;
        parse_payload(&payload, self.delimiter)
    }

    /// Full pipeline: fetch, parse, normalize. Re-running replaces whatever
    /// set the caller held before.
    pub async fn load_statements(
        &self,
        source: &StatementSource,
    ) -> Result<Vec<CanonicalStatement>, SourceUnavailable> {
        let raws = match self.load_raw_records(source).await {
            Ok(raws) => raws,
            Err(e) => {
                tracing::warn!(source = %source.describe(), error = %e, "statement source unavailable");
                return Err(e);
            }
        };

        let statements = normalize_all(&raws);
        tracing::info!(
            source = %source.describe(),
            rows = raws.len(),
            statements = statements.len(),
            "loaded statements"
        );
        Ok(statements)
    }

    async fn trigger_parse(&self, url: &str) -> Result<(), SourceUnavailable> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| fetch_error(url, source))?;

        let status = resp.status();
        let reply: ParseReply = resp.json().await.unwrap_or_default();

        if !status.is_success() {
            return Err(SourceUnavailable::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message: reply
                    .error
                    .unwrap_or_else(|| "failed to generate CSV".to_string()),
            });
        }

        tracing::debug!(
            url,
            csv_file = ?reply.csv_file,
            message = ?reply.message,
            "extractor regenerated statements"
        );
        Ok(())
    }

    async fn get_text(&self, url: &str) -> Result<String, SourceUnavailable> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| fetch_error(url, source))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceUnavailable::Status {
                url: url.to_string(),
                status: status.as_u16(),
                message: "failed to fetch CSV".to_string(),
            });
        }

        resp.text().await.map_err(|source| fetch_error(url, source))
    }
}

fn fetch_error(url: &str, source: reqwest::Error) -> SourceUnavailable {
    SourceUnavailable::Fetch {
        url: url.to_string(),
        source,
    }
}

/// Load statements with a default loader.
pub async fn load_statements(source: &StatementSource) -> Result<Vec<CanonicalStatement>, SourceUnavailable> {
    StatementLoader::new().load_statements(source).await
}
