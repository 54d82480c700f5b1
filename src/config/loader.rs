//! Top-level config loading pipeline.
//!
//! Source order: explicit `--config` path, then `./chatsh.toml`, then
//! `<config root>/chatsh/chatsh.toml`, then built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::env::{apply_runtime_env_overrides, resolve_credential};
use super::types::FileConfig;
use super::Config;

/// Load configuration from disk and environment.
///
/// Fails with [`ConfigError::MissingCredential`] when the credential variable
/// is unset, so callers never reach the network without one.
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text(path_override, &read_file, &config_root)?;
    match &source {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config file"),
        None => tracing::debug!("no config file found; using defaults"),
    }
    let parsed: FileConfig = toml::from_str(&text)?;
    let mut config = resolve_file_config(parsed)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    validate(&config)?;
    resolve_credential(&mut config, &env_lookup)?;
    Ok(config)
}

/// Read config text from the highest-precedence source that exists.
fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, Option<PathBuf>), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must be readable.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, Some(path)));
    }

    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(root) = config_root() {
        candidates.push(root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    for path in candidates {
        if let Ok(text) = read_file(&path) {
            return Ok((text, Some(path)));
        }
    }
    Ok((String::new(), None))
}

fn resolve_file_config(file: FileConfig) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    if let Some(url) = file.api.base_url {
        config.api.base_url = url;
    }
    if let Some(model) = file.api.model {
        config.api.model = model;
    }
    if let Some(temperature) = file.api.temperature {
        config.api.temperature = temperature;
    }
    if let Some(timeout) = file.api.timeout_secs {
        config.api.timeout_secs = timeout.max(1);
    }
    if let Some(var) = file.api.api_key_env {
        if var.trim().is_empty() {
            return Err(ConfigError::Invalid("api.api_key_env must not be empty".into()));
        }
        config.api.api_key_env = var.trim().to_string();
    }
    if let Some(shell) = file.exec.shell {
        if shell.trim().is_empty() {
            return Err(ConfigError::Invalid("exec.shell must not be empty".into()));
        }
        config.exec.shell = shell;
    }
    if let Some(color) = file.display.color {
        config.display.color = color;
    }
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if !(0.0..=2.0).contains(&config.api.temperature) {
        return Err(ConfigError::Invalid(format!(
            "temperature must be between 0 and 2, got {}",
            config.api.temperature
        )));
    }
    if config.api.base_url.trim().is_empty() {
        return Err(ConfigError::Invalid("api.base_url must not be empty".into()));
    }
    Ok(())
}

/// Root directory holding per-user config (`$XDG_CONFIG_HOME` or `~/.config`).
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
