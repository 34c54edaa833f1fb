use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{cardparse_home, ensure_cardparse_home};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    pub batch: BatchSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BatchSection {
    /// Folder holding the sample statements
    pub sample_dir: PathBuf,
    /// File names processed by `cardparse batch`, in order
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    pub pretty: bool,
    pub show_raw_text: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            batch: BatchSection::default(),
            output: OutputSection::default(),
        }
    }
}

impl Default for BatchSection {
    fn default() -> Self {
        Self {
            sample_dir: PathBuf::from("sample_input_pdfs"),
            files: ["HDFC.pdf", "AXIS.pdf", "ICICI.pdf", "IDFC.pdf", "SYN.pdf"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            pretty: true,
            show_raw_text: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(cardparse_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

/// Like [`load_config_from`], but a broken file falls back to defaults.
/// The error is handed back so it can be logged once tracing is up.
pub fn load_config_or_default_from(p: &Path) -> (Config, Option<anyhow::Error>) {
    match load_config_from(p) {
        Ok(cfg) => (cfg, None),
        Err(e) => (Config::default(), Some(e)),
    }
}

pub fn load_config_or_default() -> (Config, Option<anyhow::Error>) {
    match config_path() {
        Ok(p) => load_config_or_default_from(&p),
        Err(e) => (Config::default(), Some(e)),
    }
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    ensure_cardparse_home()?;
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
