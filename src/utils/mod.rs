//! Generic utility primitives with zero domain knowledge.
//!
//! - `command` - Argument-vector command lines and process helpers
//! - `shell` - Shell quoting for display and prefix splitting

pub mod command;
pub mod shell;
