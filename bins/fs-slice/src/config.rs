//! Configuration file loading
//!
//! Settings come from an explicit path, the first existing candidate in the
//! working directory, or the built-in defaults. Command-line flags override
//! whatever is loaded here.

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use foodshare_slice::Separator;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Candidate config files, checked in order.
const CONFIG_CANDIDATES: &[&str] = &[".fs-slice.toml", "fs-slice.toml", ".config/fs-slice.toml"];

/// Settings read from a TOML config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How input text is split into elements
    pub separator: Separator,
    /// Output format when `--format` is not given
    pub format: OutputFormat,
    /// Log filter when neither `RUST_LOG` nor `--verbose` is set
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: Separator::Line,
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let settings = match &config_path {
            Some(p) => load_config_file(p)?,
            None => Settings::default(),
        };

        Ok(Self {
            settings,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))
}
