//! Configuration file loading

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Where archives are extracted; the system temp dir when unset
    pub work_dir: Option<PathBuf>,
    pub format: ReportFormat,
}

impl GateConfig {
    pub fn work_dir(&self) -> PathBuf {
        self.work_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// Default config file location (~/.config/packgate/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(crate::APP_NAME).join("config.toml"))
}

/// Parse settings from a TOML string
pub fn parse_config(content: &str) -> Result<GateConfig, SettingsError> {
    Ok(toml::from_str(content)?)
}

/// Load settings from a specific file
pub fn load_config_file(path: &Path) -> Result<GateConfig, SettingsError> {
    let content = fs::read_to_string(path).map_err(|source| SettingsError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Load settings from `explicit` if given, else from the default location if
/// present, else defaults
pub fn load_config(explicit: Option<&Path>) -> Result<GateConfig, SettingsError> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            tracing::debug!(path = %path.display(), "loading default config");
            load_config_file(&path)
        }
        _ => Ok(GateConfig::default()),
    }
}
