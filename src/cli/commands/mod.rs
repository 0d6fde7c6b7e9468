//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `convert`: run a full playlist conversion
//! - `tracks`: preview the source playlist's track list
//! - `token`: store an access token in the config file

mod convert;
mod token;
mod tracks;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

pub use convert::cmd_convert;
pub use token::{cmd_set_token, TokenService};
pub use tracks::cmd_tracks;

/// Playlist Porter CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a Spotify playlist into a YouTube playlist
    Convert {
        /// Spotify playlist id to read tracks from
        source_playlist: String,
        /// YouTube playlist id to insert videos into
        destination_playlist: String,
        /// Spotify OAuth access token (or set SPOTIFY_ACCESS_TOKEN env var)
        #[arg(long, env = "SPOTIFY_ACCESS_TOKEN")]
        spotify_token: Option<String>,
        /// YouTube OAuth access token (or set YOUTUBE_ACCESS_TOKEN env var)
        #[arg(long, env = "YOUTUBE_ACCESS_TOKEN")]
        youtube_token: Option<String>,
        /// Attempt budget for each insertion (default from config)
        #[arg(long)]
        max_attempts: Option<u32>,
    },
    /// List the tracks of a Spotify playlist without converting
    Tracks {
        /// Spotify playlist id
        playlist: String,
        /// Spotify OAuth access token (or set SPOTIFY_ACCESS_TOKEN env var)
        #[arg(long, env = "SPOTIFY_ACCESS_TOKEN")]
        spotify_token: Option<String>,
    },
    /// Store an access token in the config file for later runs
    SetToken {
        /// Which service the token is for
        #[arg(value_enum)]
        service: TokenService,
        /// The OAuth access token
        token: String,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let config = crate::config::load();

    match &cli.command {
        Commands::Convert {
            source_playlist,
            destination_playlist,
            spotify_token,
            youtube_token,
            max_attempts,
        } => cmd_convert(
            &rt,
            &config,
            source_playlist,
            destination_playlist,
            spotify_token.as_deref(),
            youtube_token.as_deref(),
            *max_attempts,
        ),
        Commands::Tracks {
            playlist,
            spotify_token,
        } => cmd_tracks(&rt, &config, playlist, spotify_token.as_deref()),
        Commands::SetToken { service, token } => cmd_set_token(*service, token),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Resolve a token from flag/env, falling back to the stored config value.
/// Exits with instructions when neither is present.
pub(crate) fn require_token(
    flag_value: Option<&str>,
    config_value: Option<&str>,
    service: &str,
    env_var: &str,
) -> String {
    match flag_value.or(config_value) {
        Some(token) => token.to_string(),
        None => {
            eprintln!("Error: {} access token required.", service);
            eprintln!(
                "Pass it via the command-line flag, the {} env var,",
                env_var
            );
            eprintln!("or store it in the [credentials] section of the config file.");
            if let Some(path) = crate::config::config_path() {
                eprintln!("Config file: {:?}", path);
            }
            std::process::exit(1);
        }
    }
}
