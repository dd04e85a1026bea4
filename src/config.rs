/// Threshold configuration loading.
///
/// Thresholds are user-owned and independent of any single query, so they
/// live in a TOML file rather than on the command line:
///
/// ```toml
/// [thresholds]
/// temp_very_hot = 38.0
/// precipitation_high = 30.0
/// ```
///
/// Any key omitted from the `[thresholds]` table keeps its built-in
/// default, so a config file only needs to state what the user actually
/// changed. The file path comes from `--config` or the `WXRISK_CONFIG`
/// environment variable; with neither set, the built-in defaults apply
/// and no file is touched.

use serde::Deserialize;
use std::path::Path;

use crate::model::ThresholdConfig;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "WXRISK_CONFIG";

// ---------------------------------------------------------------------------
// Config file shape
// ---------------------------------------------------------------------------

/// Root of the config file. A table per concern leaves room for future
/// sections without breaking existing files.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub thresholds: ThresholdConfig,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when loading a config file.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The named file could not be read.
    Io(String),
    /// The file was read but is not valid config TOML.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config read error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse config TOML text.
pub fn parse(text: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Load a config file from disk.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
    parse(&text)
}

/// Resolve the effective configuration.
///
/// An explicitly named file (flag or environment) must load — a broken
/// path the user asked for is an error, never a silent fallback to
/// defaults. Only the absence of any named file yields the built-ins.
pub fn load_or_default(explicit_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let named = explicit_path
        .map(String::from)
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok());

    match named {
        Some(path) => load_from_path(Path::new(&path)),
        None => Ok(AppConfig::default()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
