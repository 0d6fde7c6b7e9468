//! Conversion service - orchestrates the playlist conversion pipeline.
//!
//! This is the high-level API for converting a playlist:
//! 1. Fetch the ordered track list from the source playlist
//! 2. Per track, resolve a candidate video via search
//! 3. Insert the candidate idempotently, under a bounded-retry budget
//! 4. Collect one outcome per track into a job result
//!
//! A single track's failure never aborts the job; only the initial track
//! fetch is fatal. Tracks are processed strictly sequentially - one search,
//! membership check, and insert completing before the next track begins -
//! which bounds load on both services' rate limits and keeps the
//! check-then-act in the inserter race-free within one job.

use super::domain::{
    ConversionJob, ConvertError, InsertOutcome, JobResult, Track, TrackOutcome,
};
use super::inserter;
use super::matcher::{self, FirstResult, MatchStrategy};
use super::retry::{self, RetryOutcome, DEFAULT_MAX_ATTEMPTS};
use super::spotify::SpotifyClient;
use super::traits::{DestinationApi, SourceApi};
use super::youtube::{self, YouTubeClient};

/// Configuration for the conversion service
pub struct ConversionConfig {
    /// Attempt budget for one insertion (membership check + insert)
    pub max_insert_attempts: u32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            max_insert_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Service for converting one source playlist into one destination playlist.
///
/// Generic over the two service clients and the match strategy so tests can
/// inject mocks and callers can substitute a stricter matcher. Production
/// clients are built per job from the job's own credentials; nothing is
/// shared across jobs.
pub struct ConversionService<S, D, M = FirstResult> {
    source: S,
    destination: D,
    strategy: M,
    config: ConversionConfig,
}

impl ConversionService<SpotifyClient, YouTubeClient, FirstResult> {
    /// Build a service with per-job API clients from the job's credentials.
    pub fn for_job(job: &ConversionJob) -> Self {
        Self::with_clients(
            SpotifyClient::new(&job.source_token),
            YouTubeClient::new(&job.destination_token),
        )
    }
}

impl<S, D> ConversionService<S, D, FirstResult>
where
    S: SourceApi,
    D: DestinationApi,
{
    /// Build a service around existing clients, with the default
    /// first-result-wins matching and retry budget.
    pub fn with_clients(source: S, destination: D) -> Self {
        Self {
            source,
            destination,
            strategy: FirstResult,
            config: ConversionConfig::default(),
        }
    }
}

impl<S, D, M> ConversionService<S, D, M>
where
    S: SourceApi,
    D: DestinationApi,
    M: MatchStrategy,
{
    /// Replace the match strategy.
    pub fn with_strategy<N: MatchStrategy>(self, strategy: N) -> ConversionService<S, D, N> {
        ConversionService {
            source: self.source,
            destination: self.destination,
            strategy,
            config: self.config,
        }
    }

    /// Override the conversion configuration.
    pub fn with_config(mut self, config: ConversionConfig) -> Self {
        self.config = config;
        self
    }

    /// Run one conversion job to completion.
    ///
    /// Fails as a whole only when the initial track fetch fails; afterwards
    /// every per-track failure is contained in that track's outcome.
    pub async fn convert(&self, job: &ConversionJob) -> Result<JobResult, ConvertError> {
        let tracks = self
            .source
            .list_playlist_tracks(&job.source_playlist_id)
            .await?;

        tracing::info!(
            "Converting {} tracks from playlist {} into playlist {}",
            tracks.len(),
            job.source_playlist_id,
            job.destination_playlist_id
        );

        let mut outcomes = Vec::with_capacity(tracks.len());
        for track in tracks {
            let outcome = self
                .convert_track(track, &job.destination_playlist_id)
                .await;

            if let TrackOutcome::FailedAfterRetries { track, error, .. } = &outcome {
                tracing::warn!(
                    "Failed to deliver {:?} by {:?}: {}",
                    track.title,
                    track.artist,
                    error
                );
            }
            outcomes.push(outcome);
        }

        let result = JobResult {
            playlist_url: youtube::playlist_url(&job.destination_playlist_id),
            outcomes,
        };

        tracing::info!(
            "Conversion finished: {} inserted, {} already present, {} unmatched, {} failed",
            result.inserted_count(),
            result.already_present_count(),
            result.no_match_count(),
            result.failed_count()
        );

        Ok(result)
    }

    /// Convert a single track. Infallible by construction - every failure
    /// mode maps to an outcome variant.
    async fn convert_track(&self, track: Track, destination_playlist_id: &str) -> TrackOutcome {
        // Absence of a match is not transient; the search is not retried.
        let candidate =
            match matcher::resolve_match(&self.destination, &track, &self.strategy).await {
                Ok(Some(id)) => id,
                Ok(None) => return TrackOutcome::NoMatchFound { track },
                Err(error) => {
                    return TrackOutcome::FailedAfterRetries {
                        track,
                        video_id: None,
                        error,
                    };
                }
            };

        let retried = retry::with_retry(self.config.max_insert_attempts, || {
            inserter::insert_if_absent(&self.destination, &candidate, destination_playlist_id)
        })
        .await;

        match retried {
            RetryOutcome::Succeeded {
                value: InsertOutcome::Inserted,
                ..
            } => TrackOutcome::Inserted {
                track,
                video_id: candidate,
            },
            RetryOutcome::Succeeded {
                value: InsertOutcome::AlreadyPresent,
                ..
            } => TrackOutcome::AlreadyPresent {
                track,
                video_id: candidate,
            },
            RetryOutcome::Exhausted { last_error, .. } => TrackOutcome::FailedAfterRetries {
                track,
                video_id: Some(candidate),
                error: last_error,
            },
        }
    }
}

/// Quick helper to run a job with production clients.
pub async fn convert(job: &ConversionJob) -> Result<JobResult, ConvertError> {
    ConversionService::for_job(job).convert(job).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::domain::VideoId;
    use crate::convert::traits::mocks::{MockDestination, MockSource};

    fn job() -> ConversionJob {
        ConversionJob {
            source_playlist_id: "SP1".to_string(),
            destination_playlist_id: "PL1".to_string(),
            source_token: "spotify-token".to_string(),
            destination_token: "youtube-token".to_string(),
        }
    }

    fn two_track_source() -> MockSource {
        MockSource::with_tracks(vec![
            Track::new("Song A", "Artist X"),
            Track::new("Song B", "Artist Y"),
        ])
    }

    #[tokio::test]
    async fn test_insert_and_no_match() {
        // Song A matches v1, Song B finds nothing, destination starts empty
        let dest = MockDestination::new().with_search_result("Song A Artist X", &["v1"]);
        let service = ConversionService::with_clients(two_track_source(), dest);

        let result = service.convert(&job()).await.unwrap();

        assert_eq!(result.outcomes.len(), 2);
        assert!(matches!(
            &result.outcomes[0],
            TrackOutcome::Inserted { video_id, .. } if video_id.as_str() == "v1"
        ));
        assert!(matches!(&result.outcomes[1], TrackOutcome::NoMatchFound { .. }));
        assert_eq!(result.playlist_url, "https://www.youtube.com/playlist?list=PL1");
    }

    #[tokio::test]
    async fn test_exactly_one_insert_call_for_matched_track() {
        let dest = MockDestination::new().with_search_result("Song A Artist X", &["v1"]);
        let service = ConversionService::with_clients(two_track_source(), dest);

        service.convert(&job()).await.unwrap();

        assert_eq!(service.destination.insert_count(), 1);
        // Song B's empty search never reaches the inserter
        assert_eq!(service.destination.list_count(), 1);
    }

    #[tokio::test]
    async fn test_already_present_issues_no_insert() {
        let dest = MockDestination::new()
            .with_search_result("Song A Artist X", &["v1"])
            .with_member("v1");
        let service = ConversionService::with_clients(two_track_source(), dest);

        let result = service.convert(&job()).await.unwrap();

        assert!(matches!(
            &result.outcomes[0],
            TrackOutcome::AlreadyPresent { video_id, .. } if video_id.as_str() == "v1"
        ));
        assert!(matches!(&result.outcomes[1], TrackOutcome::NoMatchFound { .. }));
        assert_eq!(service.destination.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_insert_succeeds_on_third_attempt() {
        let source = MockSource::with_tracks(vec![Track::new("Song C", "Artist Z")]);
        let dest = MockDestination::new()
            .with_search_result("Song C Artist Z", &["v2"])
            .failing_inserts("v2", 2);
        let service = ConversionService::with_clients(source, dest);

        let result = service.convert(&job()).await.unwrap();

        assert!(matches!(
            &result.outcomes[0],
            TrackOutcome::Inserted { video_id, .. } if video_id.as_str() == "v2"
        ));
        assert_eq!(service.destination.insert_count(), 3);
    }

    #[tokio::test]
    async fn test_exhausted_retries_do_not_abort_the_job() {
        let source = MockSource::with_tracks(vec![
            Track::new("Song C", "Artist Z"),
            Track::new("Song A", "Artist X"),
        ]);
        let dest = MockDestination::new()
            .with_search_result("Song C Artist Z", &["v3"])
            .with_search_result("Song A Artist X", &["v1"])
            .failing_inserts("v3", usize::MAX);
        let service = ConversionService::with_clients(source, dest);

        let result = service.convert(&job()).await.unwrap();

        match &result.outcomes[0] {
            TrackOutcome::FailedAfterRetries {
                video_id: Some(id),
                error: ConvertError::Upstream(_),
                ..
            } => assert_eq!(id.as_str(), "v3"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        // The remaining track was still processed
        assert!(matches!(&result.outcomes[1], TrackOutcome::Inserted { .. }));
        // 3 failed attempts for v3, 1 successful for v1
        assert_eq!(service.destination.insert_count(), 4);
    }

    #[tokio::test]
    async fn test_outcome_count_matches_track_count() {
        let dest = MockDestination::new();
        let service = ConversionService::with_clients(two_track_source(), dest);

        let result = service.convert(&job()).await.unwrap();
        assert_eq!(result.outcomes.len(), 2);
        assert_eq!(result.no_match_count(), 2);
    }

    #[tokio::test]
    async fn test_rerun_produces_no_new_inserts() {
        let dest = MockDestination::new()
            .with_search_result("Song A Artist X", &["v1"])
            .with_search_result("Song B Artist Y", &["v9"]);
        let service = ConversionService::with_clients(two_track_source(), dest);

        let first = service.convert(&job()).await.unwrap();
        assert_eq!(first.inserted_count(), 2);

        let second = service.convert(&job()).await.unwrap();
        assert_eq!(second.inserted_count(), 0);
        assert_eq!(second.already_present_count(), 2);
        // Two inserts total across both runs, no duplicates
        assert_eq!(service.destination.insert_count(), 2);
        assert_eq!(service.destination.members().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_the_job() {
        let source = MockSource::with_error(ConvertError::Unauthorized);
        let dest = MockDestination::new();
        let service = ConversionService::with_clients(source, dest);

        let result = service.convert(&job()).await;

        assert!(matches!(result, Err(ConvertError::Unauthorized)));
        assert_eq!(service.destination.search_count(), 0);
    }

    #[tokio::test]
    async fn test_search_failure_is_contained() {
        struct FailingSearch;

        #[async_trait::async_trait]
        impl crate::convert::traits::DestinationApi for FailingSearch {
            async fn search(
                &self,
                _query: &str,
                _max_results: u8,
            ) -> Result<Vec<VideoId>, ConvertError> {
                Err(ConvertError::Upstream("search down".to_string()))
            }

            async fn list_playlist_items_by_video(
                &self,
                _video_id: &VideoId,
                _playlist_id: &str,
            ) -> Result<Vec<VideoId>, ConvertError> {
                Ok(vec![])
            }

            async fn insert_item(
                &self,
                _video_id: &VideoId,
                _playlist_id: &str,
            ) -> Result<(), ConvertError> {
                Ok(())
            }
        }

        let service = ConversionService::with_clients(two_track_source(), FailingSearch);
        let result = service.convert(&job()).await.unwrap();

        // Both tracks get a contained failure; the job itself succeeds
        assert_eq!(result.outcomes.len(), 2);
        assert_eq!(result.failed_count(), 2);
        assert!(matches!(
            &result.outcomes[0],
            TrackOutcome::FailedAfterRetries { video_id: None, .. }
        ));
    }
}
