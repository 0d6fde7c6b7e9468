//! YouTube Data API v3 integration
//!
//! Destination-side client: video search, playlist membership listing,
//! and playlist item insertion.
//!
//! API docs: https://developers.google.com/youtube/v3/docs

mod adapter;
mod client;
pub mod dto;

pub use adapter::{to_member_video_ids, to_video_ids};
pub use client::YouTubeClient;

/// Canonical watch-page URL for a destination playlist.
pub fn playlist_url(playlist_id: &str) -> String {
    format!("https://www.youtube.com/playlist?list={}", playlist_id)
}
