//! Internal domain models for the playlist conversion pipeline.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters.

/// A single track from the source playlist.
///
/// Only the fields needed to build a search query are carried; a track
/// has no identity beyond them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Track title
    pub title: String,
    /// Primary (first listed) artist name
    pub artist: String,
}

impl Track {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Free-text search query: `"<title> <artist>"`.
    pub fn search_query(&self) -> String {
        format!("{} {}", self.title, self.artist)
    }
}

/// Opaque identifier of a video on the destination service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(pub String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One end-to-end conversion request.
///
/// Owned exclusively by a single `convert` call; never persisted.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    /// Source (Spotify) playlist to read tracks from
    pub source_playlist_id: String,
    /// Destination (YouTube) playlist to insert into
    pub destination_playlist_id: String,
    /// Bearer token for the source service
    pub source_token: String,
    /// Bearer token for the destination service
    pub destination_token: String,
}

/// Result of inserting one candidate into the destination playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The video was not present and has been inserted
    Inserted,
    /// The video was already in the playlist; no write was performed
    AlreadyPresent,
}

/// Per-track result of a conversion attempt.
///
/// Exactly one outcome is produced per source track, in source order.
#[derive(Debug, Clone)]
pub enum TrackOutcome {
    /// Matched and newly inserted into the destination playlist
    Inserted { track: Track, video_id: VideoId },
    /// Matched, but the video was already in the destination playlist
    AlreadyPresent { track: Track, video_id: VideoId },
    /// The search returned no results; nothing was inserted
    NoMatchFound { track: Track },
    /// The track could not be delivered; carries the last error.
    /// `video_id` is `None` when the search itself failed before a
    /// candidate was resolved.
    FailedAfterRetries {
        track: Track,
        video_id: Option<VideoId>,
        error: ConvertError,
    },
}

impl TrackOutcome {
    pub fn track(&self) -> &Track {
        match self {
            Self::Inserted { track, .. }
            | Self::AlreadyPresent { track, .. }
            | Self::NoMatchFound { track }
            | Self::FailedAfterRetries { track, .. } => track,
        }
    }
}

/// Result of one whole conversion job. Read-only once returned.
#[derive(Debug, Clone)]
pub struct JobResult {
    /// Canonical URL of the destination playlist
    pub playlist_url: String,
    /// One entry per source track, in source order
    pub outcomes: Vec<TrackOutcome>,
}

impl JobResult {
    pub fn inserted_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TrackOutcome::Inserted { .. }))
            .count()
    }

    pub fn already_present_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TrackOutcome::AlreadyPresent { .. }))
            .count()
    }

    pub fn no_match_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TrackOutcome::NoMatchFound { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, TrackOutcome::FailedAfterRetries { .. }))
            .count()
    }
}

/// Errors that can occur while talking to either service.
///
/// A zero-result search is NOT an error - it becomes `TrackOutcome::NoMatchFound`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConvertError {
    #[error("Credential rejected by the service")]
    Unauthorized,

    #[error("Playlist not found")]
    NotFound,

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Upstream unavailable: {0}")]
    Upstream(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_format() {
        let track = Track::new("Song A", "Artist X");
        assert_eq!(track.search_query(), "Song A Artist X");
    }

    #[test]
    fn test_job_result_counts() {
        let track = Track::new("Song", "Artist");
        let result = JobResult {
            playlist_url: "https://www.youtube.com/playlist?list=PL1".to_string(),
            outcomes: vec![
                TrackOutcome::Inserted {
                    track: track.clone(),
                    video_id: VideoId("v1".to_string()),
                },
                TrackOutcome::AlreadyPresent {
                    track: track.clone(),
                    video_id: VideoId("v2".to_string()),
                },
                TrackOutcome::NoMatchFound {
                    track: track.clone(),
                },
                TrackOutcome::FailedAfterRetries {
                    track,
                    video_id: Some(VideoId("v3".to_string())),
                    error: ConvertError::Upstream("503".to_string()),
                },
            ],
        };
        assert_eq!(result.inserted_count(), 1);
        assert_eq!(result.already_present_count(), 1);
        assert_eq!(result.no_match_count(), 1);
        assert_eq!(result.failed_count(), 1);
    }
}
