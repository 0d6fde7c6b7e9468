//! Source playlist preview command.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::convert::spotify::SpotifyClient;
use crate::convert::ConvertError;

use super::require_token;

/// List a Spotify playlist's tracks without converting anything
pub fn cmd_tracks(
    rt: &Runtime,
    config: &Config,
    playlist: &str,
    spotify_token: Option<&str>,
) -> anyhow::Result<()> {
    let token = require_token(
        spotify_token,
        config.credentials.spotify_access_token.as_deref(),
        "Spotify",
        "SPOTIFY_ACCESS_TOKEN",
    );

    let client = SpotifyClient::new(token);

    rt.block_on(async {
        match client.playlist_tracks(playlist).await {
            Ok(tracks) => {
                if tracks.is_empty() {
                    println!("Playlist {} has no usable tracks.", playlist);
                    return;
                }
                for (i, track) in tracks.iter().enumerate() {
                    println!("{:3}. {} - {}", i + 1, track.artist, track.title);
                }
                println!();
                println!("{} tracks", tracks.len());
            }
            Err(ConvertError::NotFound) => {
                eprintln!("Error: playlist {} not found.", playlist);
                std::process::exit(1);
            }
            Err(ConvertError::Unauthorized) => {
                eprintln!("Error: Spotify rejected the access token.");
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
