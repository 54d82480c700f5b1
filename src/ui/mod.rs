//! Terminal-facing contracts.
//!
//! The session depends on `ui::render::RenderSink` and
//! `ui::terminal::LineInput` rather than on `crate::tui` directly, so tests
//! can script input and capture output.

pub mod render;
pub mod terminal;
