//! Playlist Porter - copies a Spotify playlist's tracks into a YouTube
//! playlist by matching each track to a best-effort search result.
//!
//! Run `playlist-porter convert <source> <destination>` with access tokens
//! for both services, or `playlist-porter tracks <playlist>` to preview the
//! source track list.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("playlist_porter=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
