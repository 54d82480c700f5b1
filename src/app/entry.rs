//! Application entry orchestration for the chatsh CLI.

use crate::cli::Args;
use chatsh::api::{ApiClient, GenerationParams};
use chatsh::config::{load_config, Config};
use chatsh::exec::ShellExecutor;
use chatsh::session::{Session, SessionRequest};
use chatsh::ui::render::Renderer;
use chatsh::ui::terminal::TerminalInput;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "CHATSH_LOG";

/// Run the CLI and return the process exit status.
pub(crate) async fn run(args: Args) -> i32 {
    init_tracing();

    let bootstrap_renderer = Renderer::new(!args.no_color);
    let config = match load_config_state(&args) {
        Ok(config) => config,
        Err(msg) => {
            bootstrap_renderer.error(&msg);
            return 1;
        }
    };
    let renderer = Renderer::new(config.display.color);
    tracing::debug!(
        base_url = %config.api.base_url,
        model = %config.api.model,
        "configuration loaded"
    );

    let client = ApiClient::new(&config.api);
    let executor = ShellExecutor::from_config(&config.exec);
    let mut input = TerminalInput::new(config.display.color);
    let session = Session::new(
        &client,
        GenerationParams::from_config(&config.api),
        &executor,
        &mut input,
        &renderer,
    );

    let request = SessionRequest {
        prompt: args.prompt_text(),
        quick_explain: args.quick_explain,
    };
    match session.run(request).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "session finished");
            outcome.exit_code()
        }
        Err(err) => {
            tracing::debug!(error = %err, "session failed");
            renderer.error(&err.to_string());
            1
        }
    }
}

/// Log to stderr, filtered by `CHATSH_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load config and apply CLI overrides.
fn load_config_state(args: &Args) -> Result<Config, String> {
    let mut config = load_config(args.config.as_deref()).map_err(|err| err.to_string())?;
    apply_cli_overrides(args, &mut config)?;
    Ok(config)
}

/// Apply CLI runtime overrides that outrank config files and environment.
fn apply_cli_overrides(args: &Args, config: &mut Config) -> Result<(), String> {
    if let Some(model) = &args.model {
        let model = model.trim();
        if model.is_empty() {
            return Err("--model must not be empty".to_string());
        }
        config.api.model = model.to_string();
    }
    if let Some(url) = &args.base_url {
        let url = url.trim();
        if url.is_empty() {
            return Err("--base-url must not be empty".to_string());
        }
        config.api.base_url = url.to_string();
    }
    if args.no_color {
        config.display.color = false;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_overrides_replace_config_values() {
        let args = Args::parse_from([
            "chatsh",
            "-m",
            "gpt-4o-mini",
            "--base-url",
            "http://localhost:8080/v1",
            "--no-color",
        ]);
        let mut config = Config::default();
        apply_cli_overrides(&args, &mut config).unwrap();
        assert_eq!(config.api.model, "gpt-4o-mini");
        assert_eq!(config.api.base_url, "http://localhost:8080/v1");
        assert!(!config.display.color);
    }

    #[test]
    fn absent_overrides_keep_config() {
        let args = Args::parse_from(["chatsh", "list", "files"]);
        let mut config = Config::default();
        let before = config.clone();
        apply_cli_overrides(&args, &mut config).unwrap();
        assert_eq!(config, before);
    }

    #[test]
    fn blank_model_override_is_rejected() {
        let args = Args::parse_from(["chatsh", "-m", " "]);
        let err = apply_cli_overrides(&args, &mut Config::default()).unwrap_err();
        assert!(err.contains("--model"));
    }
}
