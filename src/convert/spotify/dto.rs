//! Spotify API Data Transfer Objects
//!
//! These types match EXACTLY what the Spotify playlist-tracks endpoint returns
//! under the field projection we request:
//! `fields=items(track(name,artists(name))),total`
//!
//! DO NOT use these types outside the spotify module - convert to domain types.
//!
//! API Reference: https://developer.spotify.com/documentation/web-api/reference/get-playlists-tracks
//!
//! Example response:
//! ```json
//! {
//!   "items": [
//!     { "track": { "name": "Song A", "artists": [{ "name": "Artist X" }] } }
//!   ],
//!   "total": 1
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level playlist tracks response (projected)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistTracksResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    /// Total tracks in the playlist (may exceed the single page we fetch)
    pub total: Option<u32>,
}

/// One playlist entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistItem {
    /// Null for removed/unavailable entries and podcast episodes
    pub track: Option<TrackObject>,
}

/// The projected track object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackObject {
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
}

/// The projected artist object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistObject {
    pub name: Option<String>,
}

/// Spotify error envelope (non-2xx responses)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    pub status: i32,
    pub message: String,
}
