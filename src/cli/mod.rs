//! Command-line interface for playlist-porter.
//!
//! This module provides CLI commands for converting a playlist and for
//! previewing a source playlist's tracks without converting anything.

mod commands;

pub use commands::{Cli, Commands, run_command};
