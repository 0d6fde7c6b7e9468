//! Playlist conversion module - copies a source playlist's tracks into a
//! destination video playlist via best-effort search matching.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`spotify/dto.rs`, `youtube/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for the two external APIs
//! - **Matcher** - Search-based track-to-video resolution with a pluggable strategy
//! - **Inserter** - Idempotent (check-then-insert) playlist writes
//! - **Retry** - Bounded-retry state machine around insertion
//! - **Service** - High-level orchestration of the conversion flow
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test the pipeline against mock services
//! 3. We can swap match policies without changing business logic
//!
//! # Usage
//!
//! ```ignore
//! use playlist_porter::convert::{ConversionJob, ConversionService};
//!
//! let job = ConversionJob {
//!     source_playlist_id: "37i9dQZF1DXcBWIGoYBM5M".to_string(),
//!     destination_playlist_id: "PLabc123".to_string(),
//!     source_token: spotify_token,
//!     destination_token: youtube_token,
//! };
//! let result = ConversionService::for_job(&job).convert(&job).await?;
//! println!("{} -> {} inserted", result.outcomes.len(), result.inserted_count());
//! ```

pub mod domain;
pub mod inserter;
pub mod matcher;
pub mod retry;
pub mod service;
pub mod spotify;
pub mod traits;
pub mod youtube;

pub use domain::{
    ConversionJob, ConvertError, InsertOutcome, JobResult, Track, TrackOutcome, VideoId,
};
pub use matcher::{FirstResult, MatchStrategy};
pub use retry::{with_retry, RetryOutcome, DEFAULT_MAX_ATTEMPTS};
pub use service::{convert, ConversionConfig, ConversionService};
