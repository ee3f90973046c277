//! Configuration structures
//!
//! Loaded by `kanban_infra::config` from the environment or a JSON/TOML
//! file. Every section has defaults so a file only needs the sheets base URL.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FORM_PATH, DEFAULT_HTTP_MAX_ATTEMPTS, DEFAULT_HTTP_TIMEOUT_SECS, KANBAN_WORKSHEET,
    TRACKING_WORKSHEET,
};
use crate::utils::date::DateLocale;

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how the two record sets are fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Origin serving `/api/sheets`, e.g. `https://kanban.example.co.id`
    pub base_url: String,
    #[serde(default = "default_kanban_worksheet")]
    pub kanban_worksheet: String,
    #[serde(default = "default_tracking_worksheet")]
    pub tracking_worksheet: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Total attempts per request (initial try + retries)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

impl SheetsConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            kanban_worksheet: default_kanban_worksheet(),
            tracking_worksheet: default_tracking_worksheet(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

/// Presentation settings consumed by the board helpers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub locale: DateLocale,
    #[serde(default = "default_form_path")]
    pub form_path: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { locale: DateLocale::default(), form_path: default_form_path() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format() }
    }
}

fn default_kanban_worksheet() -> String {
    KANBAN_WORKSHEET.to_string()
}

fn default_tracking_worksheet() -> String {
    TRACKING_WORKSHEET.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_max_attempts() -> usize {
    DEFAULT_HTTP_MAX_ATTEMPTS
}

fn default_form_path() -> String {
    DEFAULT_FORM_PATH.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
