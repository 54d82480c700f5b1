//! Configuration data model.
//!
//! `FileConfig` mirrors the on-disk TOML and leaves every field optional;
//! `Config` is the resolved runtime view after defaults and env overrides.

use serde::Deserialize;

use super::defaults::{
    DEFAULT_API_BASE_URL, DEFAULT_API_KEY_ENV, DEFAULT_API_TIMEOUT_SECS, DEFAULT_MODEL_ID,
    DEFAULT_SHELL, DEFAULT_TEMPERATURE,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub exec: ExecConfig,
    pub display: DisplayConfig,
}

/// Resolved API connection settings handed to `ApiClient::new`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Credential read from `api_key_env`. Never empty after loading.
    pub api_key: String,
    /// Name of the environment variable the credential came from.
    pub api_key_env: String,
    pub model: String,
    pub temperature: f64,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
            api_key: String::new(),
            api_key_env: DEFAULT_API_KEY_ENV.into(),
            model: DEFAULT_MODEL_ID.into(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

/// Shell execution settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecConfig {
    /// Program invoked as `<shell> -c <command>`.
    pub shell: String,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            shell: DEFAULT_SHELL.into(),
        }
    }
}

/// Terminal output settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub api: FileApiConfig,
    pub exec: FileExecConfig,
    pub display: FileDisplayConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileApiConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub timeout_secs: Option<u64>,
    pub api_key_env: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileExecConfig {
    pub shell: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileDisplayConfig {
    pub color: Option<bool>,
}
