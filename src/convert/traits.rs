//! Trait definitions for the external service clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.
//!
//! # Example
//!
//! ```ignore
//! use playlist_porter::convert::traits::DestinationApi;
//!
//! // In production code:
//! async fn find<D: DestinationApi>(dest: &D, query: &str) {
//!     let hits = dest.search(query, 1).await?;
//! }
//!
//! // In tests:
//! struct MockDestination { ... }
//! impl DestinationApi for MockDestination { ... }
//! ```

use async_trait::async_trait;

use super::domain::{ConvertError, Track, VideoId};

/// Trait for the source service (playlist track enumeration).
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait SourceApi: Send + Sync {
    /// Fetch the ordered track list for a playlist.
    async fn list_playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, ConvertError>;
}

/// Trait for the destination service (search, membership, insertion).
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait DestinationApi: Send + Sync {
    /// Search for videos matching a free-text query, best match first.
    async fn search(&self, query: &str, max_results: u8) -> Result<Vec<VideoId>, ConvertError>;

    /// List the playlist items referencing a video (empty = not a member).
    async fn list_playlist_items_by_video(
        &self,
        video_id: &VideoId,
        playlist_id: &str,
    ) -> Result<Vec<VideoId>, ConvertError>;

    /// Insert a video into a playlist.
    async fn insert_item(&self, video_id: &VideoId, playlist_id: &str)
        -> Result<(), ConvertError>;
}

// Implement traits for real clients

#[async_trait]
impl SourceApi for super::spotify::SpotifyClient {
    async fn list_playlist_tracks(&self, playlist_id: &str) -> Result<Vec<Track>, ConvertError> {
        self.playlist_tracks(playlist_id).await
    }
}

#[async_trait]
impl DestinationApi for super::youtube::YouTubeClient {
    async fn search(&self, query: &str, max_results: u8) -> Result<Vec<VideoId>, ConvertError> {
        self.search(query, max_results).await
    }

    async fn list_playlist_items_by_video(
        &self,
        video_id: &VideoId,
        playlist_id: &str,
    ) -> Result<Vec<VideoId>, ConvertError> {
        self.playlist_members(video_id, playlist_id).await
    }

    async fn insert_item(
        &self,
        video_id: &VideoId,
        playlist_id: &str,
    ) -> Result<(), ConvertError> {
        self.insert_item(video_id, playlist_id).await
    }
}
