//! Default configuration constants.

/// OpenAI-compatible API base URL.
pub(super) const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
/// Chat model used when neither config nor env names one.
pub(super) const DEFAULT_MODEL_ID: &str = "gpt-3.5-turbo";
/// Low sampling temperature keeps generated commands consistent.
pub(super) const DEFAULT_TEMPERATURE: f64 = 0.1;
/// Timeout for one model API request.
pub(super) const DEFAULT_API_TIMEOUT_SECS: u64 = 60;
/// Environment variable holding the API credential.
pub(super) const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Shell used to run accepted commands.
pub(super) const DEFAULT_SHELL: &str = "sh";
/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "chatsh.toml";
/// Directory under the config root holding `chatsh.toml`.
pub(super) const CONFIG_DIR_NAME: &str = "chatsh";
