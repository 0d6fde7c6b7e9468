//! Spotify Web API integration
//!
//! Source playlist reader: fetches the ordered (title, artist) track list
//! for a playlist using a minimal field projection.
//!
//! API docs: https://developer.spotify.com/documentation/web-api

mod adapter;
mod client;
pub mod dto;

pub use adapter::to_tracks;
pub use client::SpotifyClient;
