use anyhow::{bail, Context, Result};
use cardlens_ingest::StatementSource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{cardlens_home, ensure_cardlens_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Extractor CSV endpoint
    pub csv_url: String,
    /// Extractor endpoint that regenerates the CSV from the statement PDFs
    pub parse_url: String,
    /// Hit `parse_url` before every fetch
    pub trigger_parse: bool,
    /// Single-byte field delimiter
    pub delimiter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub json: bool,
    /// Fallback tracing filter when neither CARDLENS_LOG nor RUST_LOG is set
    pub log_level: String,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            csv_url: "http://localhost:5000/parsed_credit_statements.csv".to_string(),
            parse_url: "http://localhost:5000/parse".to_string(),
            trigger_parse: true,
            delimiter: ",".to_string(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            json: false,
            log_level: "warn".to_string(),
        }
    }
}

impl SourceSection {
    /// The configured remote source, with the parse trigger if enabled.
    pub fn statement_source(&self) -> StatementSource {
        let source = StatementSource::url(&self.csv_url);
        if self.trigger_parse && !self.parse_url.trim().is_empty() {
            source.with_parse_trigger(&self.parse_url)
        } else {
            source
        }
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [b] => Ok(*b),
            _ => bail!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(cardlens_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = ensure_cardlens_home()?.join("config.toml");
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
