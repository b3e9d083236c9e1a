//! # Configuration
//!
//! Viewer settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cryptovault/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! None of this reaches the catalog; it only shapes the shell around it.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub initial_selection: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub highlight_theme: Option<String>,
    pub show_tips: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE: &str = "cryptovault.log";
pub const DEFAULT_HIGHLIGHT_THEME: &str = "base16-ocean.dark";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Key to select on startup. Not validated here; the selector decides.
    pub initial_selection: Option<String>,
    pub log_level: String,
    pub log_file: String,
    pub highlight_theme: String,
    pub show_tips: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.cryptovault/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cryptovault").join("config.toml"))
}

/// Load config from `~/.cryptovault/config.toml`.
pub fn load_config() -> Result<ViewerConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(ViewerConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ViewerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<ViewerConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ViewerConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ViewerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Split a load result into the config to run with and the error, if any,
/// to report once logging is up. Errors fall back to defaults.
pub fn or_defaults(
    loaded: Result<ViewerConfig, ConfigError>,
) -> (ViewerConfig, Option<ConfigError>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (ViewerConfig::default(), Some(e)),
    }
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# CryptoVault Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# initial_selection = "aes"          # "rsa", "ecc", "aes" or "chacha20"
# log_level = "info"                 # "error", "warn", "info", "debug", "trace"
# log_file = "cryptovault.log"

# [display]
# highlight_theme = "base16-ocean.dark"
# show_tips = true
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_selection` is the `--select` flag (None = not specified).
pub fn resolve(config: &ViewerConfig, cli_selection: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_selection, |name| std::env::var(name).ok())
}

fn resolve_with_env(
    config: &ViewerConfig,
    cli_selection: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Initial selection: CLI → env → config → none
    let initial_selection = cli_selection
        .map(|s| s.to_string())
        .or_else(|| env("CRYPTOVAULT_SELECT"))
        .or_else(|| config.general.initial_selection.clone());

    let log_level = env("CRYPTOVAULT_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let log_file = env("CRYPTOVAULT_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let highlight_theme = env("CRYPTOVAULT_THEME")
        .or_else(|| config.display.highlight_theme.clone())
        .unwrap_or_else(|| DEFAULT_HIGHLIGHT_THEME.to_string());

    ResolvedConfig {
        initial_selection,
        log_level,
        log_file,
        highlight_theme,
        show_tips: config.display.show_tips.unwrap_or(true),
    }
}
