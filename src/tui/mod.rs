//! Terminal user-interface building blocks.
//!
//! Input editing, text layout, and output styling are kept in separate
//! modules; `crate::ui` exposes the contracts the session depends on.

pub mod input;
mod line_buffer;
mod markdown;
pub mod renderer;
pub mod settings;
pub mod text;

pub use input::{read_line, ReadOutcome};
pub use renderer::Renderer;
