//! Adapter layer: Convert YouTube DTOs to domain models
//!
//! This is the ONLY place where YouTube DTO types are converted to domain
//! types. If the API changes its response shapes, only this file and dto.rs
//! need to change.

use super::dto;
use crate::convert::domain::VideoId;

/// Extract video ids from a search response, in result order.
///
/// Non-video hits (channels, playlists) carry no `videoId` and are skipped.
pub fn to_video_ids(response: dto::SearchResponse) -> Vec<VideoId> {
    response
        .items
        .into_iter()
        .filter_map(|item| item.id.video_id)
        .map(VideoId)
        .collect()
}

/// Extract the video ids referenced by existing playlist items.
pub fn to_member_video_ids(response: dto::PlaylistItemsResponse) -> Vec<VideoId> {
    response
        .items
        .into_iter()
        .filter_map(|item| item.snippet)
        .filter_map(|snippet| snippet.resource_id)
        .filter_map(|resource| resource.video_id)
        .map(VideoId)
        .collect()
}
