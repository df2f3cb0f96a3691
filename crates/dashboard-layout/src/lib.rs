//! Dashboard layout command-line library
//!
//! This crate wires the `widget-layout` store to a configuration file,
//! logging and the `dashlayout` command-line interface. The binary is a thin
//! shell over [`commands`]; everything it does can be driven from here.

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Command handlers for reading and editing the layout.
pub mod commands;

/// Tracing subscriber setup.
pub mod logging;

pub use commands::{open_store, resolve_layout_path, CommandError};
