use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$CARDPARSE_HOME`, else `~/.cardparse`
pub fn cardparse_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("CARDPARSE_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".cardparse"))
}

pub fn ensure_cardparse_home() -> Result<PathBuf> {
    let dir = cardparse_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
