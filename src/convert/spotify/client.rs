//! Spotify HTTP client
//!
//! Handles communication with the Spotify Web API.
//! See: https://developer.spotify.com/documentation/web-api
//!
//! Requests only the minimal field projection (title + artist names) to
//! bound payload size. A single page is fetched; playlists longer than one
//! page are truncated (known limitation of the fixed projection).

use super::{adapter, dto};
use crate::convert::domain::{ConvertError, Track};

/// Spotify API client, scoped to one job's bearer token.
pub struct SpotifyClient {
    http_client: reqwest::Client,
    base_url: String,
    access_token: String,
}

/// Field projection for the playlist-tracks request
const TRACK_FIELDS: &str = "items(track(name,artists(name))),total";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl SpotifyClient {
    /// Create a new client with the given access token
    pub fn new(access_token: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://api.spotify.com/v1".to_string(),
            access_token: access_token.into(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Fetch the ordered track list for a playlist.
    ///
    /// Entries without a usable title or artist are dropped by the adapter.
    pub async fn playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, ConvertError> {
        let response = self.send_tracks_request(playlist_id).await?;
        Ok(adapter::to_tracks(response))
    }

    /// Send the HTTP request and parse the response
    async fn send_tracks_request(
        &self,
        playlist_id: &str,
    ) -> Result<dto::PlaylistTracksResponse, ConvertError> {
        let url = format!(
            "{}/playlists/{}/tracks?fields={}",
            self.base_url,
            playlist_id,
            urlencoding::encode(TRACK_FIELDS)
        );

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| ConvertError::Upstream(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ConvertError::Unauthorized);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ConvertError::NotFound);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ConvertError::RateLimited);
        }

        if !status.is_success() {
            // Try to parse the error envelope for a useful message
            if let Ok(body) = response.json::<dto::ErrorResponse>().await {
                return Err(ConvertError::Api(body.error.message));
            }
            return Err(ConvertError::Upstream(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<dto::PlaylistTracksResponse>()
            .await
            .map_err(|e| ConvertError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SpotifyClient::new("token");
        assert_eq!(client.base_url, "https://api.spotify.com/v1");
        assert_eq!(client.access_token, "token");
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = SpotifyClient::with_base_url("token", "http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_field_projection_is_minimal() {
        // The projection drives both payload size and the one-page limitation
        assert_eq!(TRACK_FIELDS, "items(track(name,artists(name))),total");
    }
}
