//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the required variable is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `KANBAN_SHEETS_BASE_URL`: Origin serving `/api/sheets` (required)
//! - `KANBAN_WORKSHEET`: Kanban worksheet name
//! - `KANBAN_TRACKING_WORKSHEET`: Tracking worksheet name
//! - `KANBAN_HTTP_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `KANBAN_HTTP_MAX_ATTEMPTS`: Attempts per request, including the first
//! - `KANBAN_LOCALE`: Date locale (`id-ID` or `en-US`)
//! - `KANBAN_FORM_PATH`: Purchase-request form path
//! - `KANBAN_LOG_LEVEL`: Default log level when `RUST_LOG` is unset
//! - `KANBAN_LOG_FORMAT`: `pretty` or `json`
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./kanban.json` or `./kanban.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use kanban_domain::{
    BoardConfig, Config, DateLocale, KanbanError, LoggingConfig, Result, SheetsConfig,
};

use crate::errors::InfraError;

const BASE_URL_VAR: &str = "KANBAN_SHEETS_BASE_URL";

/// Load configuration with automatic fallback strategy
///
/// Uses environment variables when `KANBAN_SHEETS_BASE_URL` is set. Only
/// when it is absent does loading fall back to a config file; an invalid
/// optional variable is reported, never skipped.
///
/// # Errors
/// Returns `KanbanError::Config` if:
/// - An environment variable has an invalid value
/// - No config file is found when the base URL is unset
/// - File format is invalid
/// - A value has the wrong type
pub fn load() -> Result<Config> {
    if env_opt(BASE_URL_VAR).is_none() {
        tracing::debug!(var = BASE_URL_VAR, "base URL not set in environment, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// Only `KANBAN_SHEETS_BASE_URL` is required; every other variable falls
/// back to its default.
///
/// # Errors
/// Returns `KanbanError::Config` if the base URL is missing or an optional
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut sheets = SheetsConfig::new(env_var(BASE_URL_VAR)?);
    if let Some(worksheet) = env_opt("KANBAN_WORKSHEET") {
        sheets.kanban_worksheet = worksheet;
    }
    if let Some(worksheet) = env_opt("KANBAN_TRACKING_WORKSHEET") {
        sheets.tracking_worksheet = worksheet;
    }
    if let Some(timeout) = env_parse::<u64>("KANBAN_HTTP_TIMEOUT_SECS")? {
        sheets.timeout_secs = timeout;
    }
    if let Some(attempts) = env_parse::<usize>("KANBAN_HTTP_MAX_ATTEMPTS")? {
        sheets.max_attempts = attempts;
    }

    let mut board = BoardConfig::default();
    if let Some(locale) = env_parse::<DateLocale>("KANBAN_LOCALE")? {
        board.locale = locale;
    }
    if let Some(form_path) = env_opt("KANBAN_FORM_PATH") {
        board.form_path = form_path;
    }

    let mut logging = LoggingConfig::default();
    if let Some(level) = env_opt("KANBAN_LOG_LEVEL") {
        logging.level = level;
    }
    if let Some(format) = env_opt("KANBAN_LOG_FORMAT") {
        logging.format = format;
    }

    Ok(Config { sheets, board, logging })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `KanbanError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(KanbanError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            KanbanError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| KanbanError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, detecting the format from the
/// file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| KanbanError::from(InfraError::from(e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| KanbanError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(KanbanError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Returns the first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "kanban.json", "kanban.toml"];

    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
            roots.push(exe_dir.join(".."));
        }
    }

    roots
        .iter()
        .flat_map(|root| FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `KanbanError::Config` if the variable is not set or empty.
fn env_var(key: &str) -> Result<String> {
    env_opt(key).ok_or_else(|| {
        KanbanError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional environment variable; blank values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse an optional environment variable with `FromStr`.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| KanbanError::Config(format!("Invalid value for {}: {}", key, e)))
        })
        .transpose()
}
