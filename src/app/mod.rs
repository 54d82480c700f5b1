//! Binary-local application orchestration.
//!
//! `main.rs` only parses arguments; wiring config, collaborators, and the
//! session lives here.

pub(crate) mod entry;
