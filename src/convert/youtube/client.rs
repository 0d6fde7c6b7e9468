//! YouTube Data API v3 HTTP client
//!
//! Handles the three calls the conversion pipeline needs: video search,
//! playlist membership listing, and playlist item insertion.
//! See: https://developers.google.com/youtube/v3/docs
//!
//! All calls are authenticated with the job's OAuth bearer token. Insertion
//! costs significant API quota (50 units per insert at time of writing), so
//! the membership check before each insert also protects the quota budget
//! on re-runs.

use super::{adapter, dto};
use crate::convert::domain::{ConvertError, VideoId};

/// YouTube API client, scoped to one job's bearer token.
pub struct YouTubeClient {
    http_client: reqwest::Client,
    base_url: String,
    access_token: String,
}

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl YouTubeClient {
    /// Create a new client with the given access token
    pub fn new(access_token: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
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

    /// Search for videos matching a free-text query, in result order.
    pub async fn search(
        &self,
        query: &str,
        max_results: u8,
    ) -> Result<Vec<VideoId>, ConvertError> {
        let url = format!(
            "{}/search?part=snippet&maxResults={}&q={}",
            self.base_url,
            max_results,
            urlencoding::encode(query)
        );

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| ConvertError::Upstream(e.to_string()))?;

        let body = Self::parse_ok::<dto::SearchResponse>(response).await?;
        Ok(adapter::to_video_ids(body))
    }

    /// List the playlist items that reference a specific video.
    ///
    /// Empty result means the video is not in the playlist.
    pub async fn playlist_members(
        &self,
        video_id: &VideoId,
        playlist_id: &str,
    ) -> Result<Vec<VideoId>, ConvertError> {
        let url = format!(
            "{}/playlistItems?part=snippet&playlistId={}&videoId={}",
            self.base_url,
            urlencoding::encode(playlist_id),
            urlencoding::encode(video_id.as_str())
        );

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| ConvertError::Upstream(e.to_string()))?;

        let body = Self::parse_ok::<dto::PlaylistItemsResponse>(response).await?;
        Ok(adapter::to_member_video_ids(body))
    }

    /// Insert a video into a playlist.
    pub async fn insert_item(
        &self,
        video_id: &VideoId,
        playlist_id: &str,
    ) -> Result<(), ConvertError> {
        let url = format!("{}/playlistItems?part=snippet", self.base_url);
        let body = dto::InsertRequest::video(playlist_id, video_id.as_str());

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ConvertError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }

        Ok(())
    }

    /// Check the status and deserialize a successful response body
    async fn parse_ok<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ConvertError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ConvertError::Parse(e.to_string()))
    }

    /// Map a non-2xx response to the error taxonomy
    async fn status_error(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ConvertError {
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                ConvertError::Unauthorized
            }
            reqwest::StatusCode::NOT_FOUND => ConvertError::NotFound,
            reqwest::StatusCode::TOO_MANY_REQUESTS => ConvertError::RateLimited,
            _ => {
                // Try to surface the API's own message
                if let Ok(body) = response.json::<dto::ErrorResponse>().await {
                    return ConvertError::Api(body.error.message);
                }
                ConvertError::Upstream(format!(
                    "HTTP {}: {}",
                    status,
                    status.canonical_reason().unwrap_or("Unknown")
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = YouTubeClient::new("token");
        assert_eq!(client.base_url, "https://www.googleapis.com/youtube/v3");
        assert_eq!(client.access_token, "token");
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = YouTubeClient::with_base_url("token", "http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
