//! Stored-credential management command.

use crate::config;

/// Which service a stored token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TokenService {
    Spotify,
    Youtube,
}

/// Store an access token in the config file for later runs.
///
/// Tokens from both services are short-lived; this is a convenience for
/// repeated runs within one session, not long-term credential storage.
pub fn cmd_set_token(service: TokenService, token: &str) -> anyhow::Result<()> {
    let mut config = config::load();

    match service {
        TokenService::Spotify => {
            config.credentials.spotify_access_token = Some(token.to_string());
        }
        TokenService::Youtube => {
            config.credentials.youtube_access_token = Some(token.to_string());
        }
    }

    config::save(&config)?;

    if let Some(path) = config::config_path() {
        println!("Token stored in {:?}", path);
    }
    Ok(())
}
