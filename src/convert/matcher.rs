//! Track-to-video match resolution.
//!
//! Builds one free-text query per track and issues exactly one search
//! request. Candidate selection is a replaceable strategy; the default is
//! first-result-wins with a result-set size of 1, deliberately preserving
//! the original behavior (no ranking, no fuzzy comparison). Callers that
//! need stricter matching - wrong covers and live recordings are a known
//! hazard of first-result-wins - substitute their own [`MatchStrategy`]
//! instead of hardening this one.

use super::domain::{ConvertError, Track, VideoId};
use super::traits::DestinationApi;

/// Candidate selection policy for search results.
pub trait MatchStrategy: Send + Sync {
    /// Result-set size to request from the search call.
    fn max_results(&self) -> u8 {
        1
    }

    /// Pick the candidate from the result list, best match first.
    /// `None` means "no match", which is an outcome, not an error.
    fn select(&self, results: Vec<VideoId>) -> Option<VideoId>;
}

/// The default policy: take whatever the search ranks first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstResult;

impl MatchStrategy for FirstResult {
    fn select(&self, results: Vec<VideoId>) -> Option<VideoId> {
        results.into_iter().next()
    }
}

/// Resolve the best candidate video for a track, or `None` when the search
/// yields zero results. Errors only on transport/auth failure.
pub async fn resolve_match<D, S>(
    destination: &D,
    track: &Track,
    strategy: &S,
) -> Result<Option<VideoId>, ConvertError>
where
    D: DestinationApi,
    S: MatchStrategy,
{
    let query = track.search_query();
    tracing::debug!("Searching destination for {:?}", query);

    let results = destination.search(&query, strategy.max_results()).await?;
    Ok(strategy.select(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::traits::mocks::MockDestination;

    #[tokio::test]
    async fn test_first_result_wins() {
        let dest = MockDestination::new().with_search_result("Song A Artist X", &["v1", "v2"]);
        let track = Track::new("Song A", "Artist X");

        let candidate = resolve_match(&dest, &track, &FirstResult).await.unwrap();

        assert_eq!(candidate, Some(VideoId("v1".to_string())));
        assert_eq!(dest.search_count(), 1);
    }

    #[tokio::test]
    async fn test_zero_results_is_not_an_error() {
        let dest = MockDestination::new();
        let track = Track::new("Obscure Song", "Unknown Artist");

        let candidate = resolve_match(&dest, &track, &FirstResult).await.unwrap();

        assert_eq!(candidate, None);
    }

    #[tokio::test]
    async fn test_custom_strategy_controls_result_size() {
        struct SecondResult;
        impl MatchStrategy for SecondResult {
            fn max_results(&self) -> u8 {
                5
            }
            fn select(&self, results: Vec<VideoId>) -> Option<VideoId> {
                results.into_iter().nth(1)
            }
        }

        let dest = MockDestination::new().with_search_result("Song A Artist X", &["v1", "v2"]);
        let track = Track::new("Song A", "Artist X");

        let candidate = resolve_match(&dest, &track, &SecondResult).await.unwrap();
        assert_eq!(candidate, Some(VideoId("v2".to_string())));
    }
}
