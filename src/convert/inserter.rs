//! Idempotent playlist insertion.
//!
//! Checks membership before writing so that a single insertion is safe to
//! retry and a whole job is safe to re-run: converting the same playlist
//! twice must not duplicate entries.
//!
//! The check-then-act is not atomic against another writer mutating the
//! same destination playlist concurrently. The pipeline assumes one writer
//! per destination playlist (the job itself); that assumption is documented,
//! not enforced.

use super::domain::{ConvertError, InsertOutcome, VideoId};
use super::traits::DestinationApi;

/// Insert `video_id` into the destination playlist unless already present.
///
/// Returns `AlreadyPresent` without performing any write when the playlist
/// already references the video.
pub async fn insert_if_absent<D: DestinationApi>(
    destination: &D,
    video_id: &VideoId,
    playlist_id: &str,
) -> Result<InsertOutcome, ConvertError> {
    let existing = destination
        .list_playlist_items_by_video(video_id, playlist_id)
        .await?;

    if !existing.is_empty() {
        tracing::debug!("Video {} already in playlist {}", video_id, playlist_id);
        return Ok(InsertOutcome::AlreadyPresent);
    }

    destination.insert_item(video_id, playlist_id).await?;
    tracing::debug!("Inserted video {} into playlist {}", video_id, playlist_id);
    Ok(InsertOutcome::Inserted)
}
