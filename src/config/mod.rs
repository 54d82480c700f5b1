//! Configuration loading from TOML files and environment variables.
//!
//! Precedence (highest wins):
//! 1. CLI flags (applied by the binary after loading)
//! 2. `CHATSH_*` environment variables
//! 3. TOML file from `--config`, `./chatsh.toml`, or
//!    `$XDG_CONFIG_HOME/chatsh/chatsh.toml` (`~/.config/chatsh/chatsh.toml`)
//! 4. Built-in defaults
//!
//! The API credential always comes from the environment (`OPENAI_API_KEY`
//! unless `api.api_key_env` names another variable).
//!
//! ```toml
//! [api]
//! base_url = "https://api.openai.com/v1"
//! model = "gpt-3.5-turbo"
//! temperature = 0.1
//! timeout_secs = 60
//! api_key_env = "OPENAI_API_KEY"
//!
//! [exec]
//! shell = "sh"
//!
//! [display]
//! color = true
//! ```

mod defaults;
mod env;
mod loader;
mod types;

pub use loader::{config_root_dir, load_config};
pub use types::{ApiConfig, Config, DisplayConfig, ExecConfig};

#[cfg(test)]
mod tests {
    use super::loader::load_config_from_sources;
    use super::*;
    use crate::error::ConfigError;
    use crate::testsupport::TestTempDir;
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn files_from(pairs: &[(&str, &str)]) -> impl Fn(&Path) -> io::Result<String> {
        let map: HashMap<PathBuf, String> = pairs
            .iter()
            .map(|(k, v)| (PathBuf::from(k), v.to_string()))
            .collect();
        move |path| {
            map.get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "missing"))
        }
    }

    fn no_root() -> Option<PathBuf> {
        None
    }

    #[test]
    fn defaults_apply_without_any_file() {
        let config = load_config_from_sources(
            None,
            files_from(&[]),
            env_from(&[("OPENAI_API_KEY", "sk-test")]),
            no_root,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.openai.com/v1");
        assert_eq!(config.api.model, "gpt-3.5-turbo");
        assert_eq!(config.api.temperature, 0.1);
        assert_eq!(config.api.api_key, "sk-test");
        assert_eq!(config.exec.shell, "sh");
        assert!(config.display.color);
    }

    #[test]
    fn missing_credential_is_fatal() {
        let err = load_config_from_sources(None, files_from(&[]), env_from(&[]), no_root)
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::MissingCredential(ref var) if var == "OPENAI_API_KEY"),
            "got: {err}"
        );
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let err = load_config_from_sources(
            None,
            files_from(&[]),
            env_from(&[("OPENAI_API_KEY", "   ")]),
            no_root,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(_)));
    }

    #[test]
    fn credential_variable_name_is_configurable() {
        let toml = "[api]\napi_key_env = \"GROQ_API_KEY\"\nbase_url = \"https://api.groq.com/openai/v1\"\n";
        let config = load_config_from_sources(
            None,
            files_from(&[("chatsh.toml", toml)]),
            env_from(&[("GROQ_API_KEY", "gsk-1"), ("OPENAI_API_KEY", "sk-ignored")]),
            no_root,
        )
        .unwrap();
        assert_eq!(config.api.api_key, "gsk-1");
        assert_eq!(config.api.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.api.base_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn local_file_wins_over_global() {
        let config = load_config_from_sources(
            None,
            files_from(&[
                ("chatsh.toml", "[api]\nmodel = \"local-model\"\n"),
                ("/cfg/chatsh/chatsh.toml", "[api]\nmodel = \"global-model\"\n"),
            ]),
            env_from(&[("OPENAI_API_KEY", "k")]),
            || Some(PathBuf::from("/cfg")),
        )
        .unwrap();
        assert_eq!(config.api.model, "local-model");
    }

    #[test]
    fn global_file_is_used_when_no_local_file() {
        let config = load_config_from_sources(
            None,
            files_from(&[(
                "/cfg/chatsh/chatsh.toml",
                "[exec]\nshell = \"bash\"\n[display]\ncolor = false\n",
            )]),
            env_from(&[("OPENAI_API_KEY", "k")]),
            || Some(PathBuf::from("/cfg")),
        )
        .unwrap();
        assert_eq!(config.exec.shell, "bash");
        assert!(!config.display.color);
    }

    #[test]
    fn env_overrides_file_values() {
        let config = load_config_from_sources(
            None,
            files_from(&[("chatsh.toml", "[api]\nmodel = \"from-file\"\ntimeout_secs = 5\n")]),
            env_from(&[
                ("OPENAI_API_KEY", "k"),
                ("CHATSH_MODEL", "from-env"),
                ("CHATSH_API_TIMEOUT_SECS", "0"),
                ("CHATSH_TEMPERATURE", "0.5"),
                ("NO_COLOR", "1"),
            ]),
            no_root,
        )
        .unwrap();
        assert_eq!(config.api.model, "from-env");
        assert_eq!(config.api.timeout_secs, 1);
        assert_eq!(config.api.temperature, 0.5);
        assert!(!config.display.color);
    }

    #[test]
    fn invalid_timeout_env_is_rejected() {
        let err = load_config_from_sources(
            None,
            files_from(&[]),
            env_from(&[("OPENAI_API_KEY", "k"), ("CHATSH_API_TIMEOUT_SECS", "soon")]),
            no_root,
        )
        .unwrap_err();
        assert!(err.to_string().contains("CHATSH_API_TIMEOUT_SECS"), "got: {err}");
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let err = load_config_from_sources(
            None,
            files_from(&[("chatsh.toml", "[api]\ntemperature = 3.5\n")]),
            env_from(&[("OPENAI_API_KEY", "k")]),
            no_root,
        )
        .unwrap_err();
        assert!(err.to_string().contains("temperature"), "got: {err}");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = load_config_from_sources(
            None,
            files_from(&[("chatsh.toml", "[api]\nmodle = \"typo\"\n")]),
            env_from(&[("OPENAI_API_KEY", "k")]),
            no_root,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "got: {err}");
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from_sources(
            Some("/nope/chatsh.toml"),
            files_from(&[]),
            env_from(&[("OPENAI_API_KEY", "k")]),
            no_root,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "got: {err}");
    }

    #[test]
    fn explicit_path_reads_from_disk() {
        let dir = TestTempDir::new("config");
        let path = dir.write_text("custom.toml", "[api]\nmodel = \"gpt-4o-mini\"\n");
        let config = load_config_from_sources(
            Some(path.to_string_lossy().as_ref()),
            |p| std::fs::read_to_string(p),
            env_from(&[("OPENAI_API_KEY", "k")]),
            no_root,
        )
        .unwrap();
        assert_eq!(config.api.model, "gpt-4o-mini");
    }
}
