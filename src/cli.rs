//! CLI argument parsing via clap.

use clap::Parser;

/// Turn a plain-English request into a shell command, then review it before running.
#[derive(Debug, Parser)]
#[command(name = "chatsh", version, long_version = chatsh::build_info::LONG_VERSION)]
pub struct Args {
    /// What the command should do. Prompted for interactively when omitted.
    /// Words after the first one are taken literally, dashes included.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub prompt: Vec<String>,

    /// Explain the given text as a command instead of generating one.
    #[arg(short = 'q', long = "quick-explain")]
    pub quick_explain: bool,

    /// Path to config file (default: ./chatsh.toml or ~/.config/chatsh/chatsh.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override model name.
    #[arg(short = 'm', long = "model")]
    pub model: Option<String>,

    /// Override API base URL.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Positional words joined with single spaces.
    pub fn prompt_text(&self) -> String {
        self.prompt.join(" ")
    }
}
