//! YouTube Data API v3 Data Transfer Objects
//!
//! These types match EXACTLY what the API returns for the three calls we
//! make (search.list, playlistItems.list, playlistItems.insert).
//! DO NOT use these types outside the youtube module - convert to domain types.
//!
//! API Reference: https://developers.google.com/youtube/v3/docs
//!
//! Example search response:
//! ```json
//! {
//!   "items": [
//!     { "id": { "kind": "youtube#video", "videoId": "dQw4w9WgXcQ" } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// search.list response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One search result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchItem {
    pub id: SearchResultId,
}

/// Polymorphic search result id; only video hits carry `videoId`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResultId {
    pub kind: Option<String>,
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// playlistItems.list response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistItemsResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

/// One playlist item
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistItem {
    pub id: Option<String>,
    pub snippet: Option<PlaylistItemSnippet>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaylistItemSnippet {
    #[serde(rename = "resourceId")]
    pub resource_id: Option<ResourceId>,
}

/// Reference to the video a playlist item wraps
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceId {
    pub kind: Option<String>,
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

/// playlistItems.insert request body
#[derive(Debug, Clone, Serialize)]
pub struct InsertRequest {
    pub snippet: InsertSnippet,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsertSnippet {
    #[serde(rename = "playlistId")]
    pub playlist_id: String,
    #[serde(rename = "resourceId")]
    pub resource_id: InsertResourceId,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsertResourceId {
    pub kind: String,
    #[serde(rename = "videoId")]
    pub video_id: String,
}

impl InsertRequest {
    /// Build the insert body for a video (the only resource kind we insert)
    pub fn video(playlist_id: &str, video_id: &str) -> Self {
        Self {
            snippet: InsertSnippet {
                playlist_id: playlist_id.to_string(),
                resource_id: InsertResourceId {
                    kind: "youtube#video".to_string(),
                    video_id: video_id.to_string(),
                },
            },
        }
    }
}

/// Google API error envelope (non-2xx responses)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    pub code: i32,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_response() {
        let json = r#"{
            "items": [
                { "id": { "kind": "youtube#video", "videoId": "dQw4w9WgXcQ" } },
                { "id": { "kind": "youtube#channel" } }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].id.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert!(response.items[1].id.video_id.is_none());
    }

    #[test]
    fn test_deserialize_playlist_items() {
        let json = r#"{
            "items": [
                {
                    "id": "PLI1",
                    "snippet": { "resourceId": { "kind": "youtube#video", "videoId": "v1" } }
                }
            ]
        }"#;

        let response: PlaylistItemsResponse = serde_json::from_str(json).unwrap();
        let resource = response.items[0]
            .snippet
            .as_ref()
            .unwrap()
            .resource_id
            .as_ref()
            .unwrap();
        assert_eq!(resource.video_id.as_deref(), Some("v1"));
    }

    #[test]
    fn test_serialize_insert_request() {
        let body = InsertRequest::video("PL123", "v1");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["snippet"]["playlistId"], "PL123");
        assert_eq!(json["snippet"]["resourceId"]["kind"], "youtube#video");
        assert_eq!(json["snippet"]["resourceId"]["videoId"], "v1");
    }

    #[test]
    fn test_deserialize_error_envelope() {
        let json = r#"{ "error": { "code": 403, "message": "quotaExceeded" } }"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error.code, 403);
    }
}
