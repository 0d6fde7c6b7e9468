//! Playlist conversion command.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::convert::{
    ConversionConfig, ConversionJob, ConversionService, ConvertError, TrackOutcome,
};

use super::require_token;

/// Convert a Spotify playlist into a YouTube playlist
pub fn cmd_convert(
    rt: &Runtime,
    config: &Config,
    source_playlist: &str,
    destination_playlist: &str,
    spotify_token: Option<&str>,
    youtube_token: Option<&str>,
    max_attempts: Option<u32>,
) -> anyhow::Result<()> {
    let spotify_token = require_token(
        spotify_token,
        config.credentials.spotify_access_token.as_deref(),
        "Spotify",
        "SPOTIFY_ACCESS_TOKEN",
    );
    let youtube_token = require_token(
        youtube_token,
        config.credentials.youtube_access_token.as_deref(),
        "YouTube",
        "YOUTUBE_ACCESS_TOKEN",
    );

    let job = ConversionJob {
        source_playlist_id: source_playlist.to_string(),
        destination_playlist_id: destination_playlist.to_string(),
        source_token: spotify_token,
        destination_token: youtube_token,
    };

    let service = ConversionService::for_job(&job).with_config(ConversionConfig {
        max_insert_attempts: max_attempts.unwrap_or(config.conversion.max_insert_attempts),
    });

    println!(
        "Converting playlist {} -> {}",
        source_playlist, destination_playlist
    );
    println!();

    rt.block_on(async {
        match service.convert(&job).await {
            Ok(result) => {
                for outcome in &result.outcomes {
                    print_outcome(outcome);
                }

                println!();
                println!(
                    "Done: {} inserted, {} already present, {} unmatched, {} failed",
                    result.inserted_count(),
                    result.already_present_count(),
                    result.no_match_count(),
                    result.failed_count()
                );
                println!("Playlist: {}", result.playlist_url);
            }
            Err(ConvertError::Unauthorized) => {
                eprintln!("Error: a credential was rejected. Tokens expire quickly;");
                eprintln!("obtain fresh ones and try again.");
                std::process::exit(1);
            }
            Err(ConvertError::NotFound) => {
                eprintln!("Error: source playlist {} not found.", source_playlist);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    });

    Ok(())
}

fn print_outcome(outcome: &TrackOutcome) {
    let track = outcome.track();
    let label = format!("{} - {}", track.artist, track.title);
    match outcome {
        TrackOutcome::Inserted { video_id, .. } => {
            println!("  + {} ({})", label, video_id);
        }
        TrackOutcome::AlreadyPresent { video_id, .. } => {
            println!("  = {} (already present as {})", label, video_id);
        }
        TrackOutcome::NoMatchFound { .. } => {
            println!("  ? {} (no match found)", label);
        }
        TrackOutcome::FailedAfterRetries { error, .. } => {
            println!("  ! {} (failed: {})", label, error);
        }
    }
}
