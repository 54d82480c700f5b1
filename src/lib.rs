//! chatsh: turn a natural-language request into a shell command.
//!
//! The crate talks to any OpenAI-compatible chat completions endpoint, keeps
//! the conversation that produced the current command, and lets the user run,
//! explain, revise, or retry it before anything executes.
//!
//! # Quick start
//!
//! ```no_run
//! use chatsh::api::{ApiClient, GenerationParams};
//! use chatsh::config::load_config;
//! use chatsh::exec::ShellExecutor;
//! use chatsh::session::{Session, SessionRequest};
//! use chatsh::ui::render::Renderer;
//! use chatsh::ui::terminal::TerminalInput;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let client = ApiClient::new(&config.api);
//! let executor = ShellExecutor::from_config(&config.exec);
//! let mut input = TerminalInput::new(config.display.color);
//! let renderer = Renderer::new(config.display.color);
//! let session = Session::new(
//!     &client,
//!     GenerationParams::from_config(&config.api),
//!     &executor,
//!     &mut input,
//!     &renderer,
//! );
//! let outcome = session
//!     .run(SessionRequest {
//!         prompt: "list files in the current directory".into(),
//!         quick_explain: false,
//!     })
//!     .await
//!     .unwrap();
//! std::process::exit(outcome.exit_code());
//! # }
//! ```

pub mod api;
pub mod build_info;
pub mod config;
pub mod conversation;
pub mod error;
pub mod exec;
pub mod extract;
pub mod prompt;
pub mod session;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
pub mod types;
pub mod ui;
