//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.zenith/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The name and theme set here are only starting values. Once the user runs
//! `UPDATE_NAME` or `THEME_COLOR`, the persisted preferences win.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::core::theme;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ZenithConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub user_name: Option<String>,
    pub theme: Option<String>,
    pub data_dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_USER_NAME: &str = "Memo";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const APP_DIR: &str = ".zenith";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub user_name: String,
    pub theme: String,
    pub log_level: LevelFilter,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.zenith`, or `.zenith` in the working directory without a home.
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(APP_DIR))
}

/// Returns the path to `~/.zenith/config.toml`.
pub fn config_path() -> PathBuf {
    app_dir().join("config.toml")
}

/// Load config from `path`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ZenithConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path: &Path) -> Result<ZenithConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ZenithConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: ZenithConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Zenith Journal Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.
# UPDATE_NAME and THEME_COLOR inside the journal override these values.

# [general]
# user_name = "Memo"                 # Or set ZENITH_USER_NAME
# theme = "classic_green"            # classic_green, amber_retro, blue_glow, light_mode
# data_dir = "/home/me/.zenith"      # Or set ZENITH_DATA_DIR / pass --data-dir

# [logging]
# level = "info"                     # error, warn, info, debug, trace, off
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
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
/// `cli_data_dir` comes from `--data-dir` (None = not specified).
pub fn resolve(config: &ZenithConfig, cli_data_dir: Option<&Path>) -> ResolvedConfig {
    // Data dir: CLI → env → config → default
    let data_dir = cli_data_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("ZENITH_DATA_DIR").ok().map(PathBuf::from))
        .or_else(|| config.general.data_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(app_dir);

    // Name: env → config → default
    let user_name = std::env::var("ZENITH_USER_NAME")
        .ok()
        .or_else(|| config.general.user_name.clone())
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());

    // Theme: env → config → default, unknown names fall back
    let requested_theme = std::env::var("ZENITH_THEME")
        .ok()
        .or_else(|| config.general.theme.clone())
        .map(|t| t.to_lowercase())
        .unwrap_or_else(|| theme::DEFAULT_THEME.to_string());
    if theme::find(&requested_theme).is_none() {
        warn!("Unknown theme '{}' in config, using default", requested_theme);
    }
    let theme = theme::find_or_default(&requested_theme).name.to_string();

    // Log level: env → config → default
    let log_level = std::env::var("ZENITH_LOG_LEVEL")
        .ok()
        .or_else(|| config.logging.level.clone())
        .and_then(|l| match LevelFilter::from_str(&l) {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Invalid log level '{}', using default", l);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        data_dir,
        user_name,
        theme,
        log_level,
    }
}
