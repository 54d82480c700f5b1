//! Environment overrides and credential lookup.
//!
//! `CHATSH_*` variables win over file values. The credential itself is only
//! ever read from the environment.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_blank(env_lookup, "CHATSH_BASE_URL") {
        config.api.base_url = url;
    }
    if let Some(model) = non_blank(env_lookup, "CHATSH_MODEL") {
        config.api.model = model;
    }
    if let Some(timeout) = non_blank(env_lookup, "CHATSH_API_TIMEOUT_SECS") {
        let parsed = timeout.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid CHATSH_API_TIMEOUT_SECS value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        // Zero would mean "no timeout" to reqwest.
        config.api.timeout_secs = parsed.max(1);
    }
    if let Some(temperature) = non_blank(env_lookup, "CHATSH_TEMPERATURE") {
        config.api.temperature = temperature.parse::<f64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid CHATSH_TEMPERATURE value `{temperature}`: expected a number"
            ))
        })?;
    }
    if env_lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        config.display.color = false;
    }
    Ok(())
}

/// Read the credential from the configured variable. Absence is fatal.
pub(super) fn resolve_credential<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let var = config.api.api_key_env.clone();
    let key = non_blank(env_lookup, &var).ok_or(ConfigError::MissingCredential(var))?;
    config.api.api_key = key;
    Ok(())
}

fn non_blank<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
