use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$CARDLENS_HOME`, or `~/.cardlens`.
pub fn cardlens_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("CARDLENS_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".cardlens"))
}

pub fn ensure_cardlens_home() -> Result<PathBuf> {
    let dir = cardlens_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
