//! Adapter layer: Convert Spotify DTOs to domain models
//!
//! This is the ONLY place where Spotify DTO types are converted to domain
//! types. If Spotify changes their response format, only this file and
//! dto.rs need to change.

use super::dto;
use crate::convert::domain::Track;

/// Convert a projected playlist-tracks response to domain tracks.
///
/// Entries that are null, untitled, or have no listed artist carry nothing
/// we can search for; they are dropped, not errored (documented lossy
/// behavior).
pub fn to_tracks(response: dto::PlaylistTracksResponse) -> Vec<Track> {
    response
        .items
        .into_iter()
        .filter_map(|item| item.track)
        .filter_map(to_track)
        .collect()
}

fn to_track(track: dto::TrackObject) -> Option<Track> {
    let title = track.name?;
    let artist = track.artists.into_iter().find_map(|a| a.name)?;
    Some(Track { title, artist })
}
