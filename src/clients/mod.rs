//! Clients and the capability surface the core logic consumes.

/// Data entities for artists, tracks, seeds and windows
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify API client
pub mod spotify;

pub use spotify::SpotifyClient;

use entities::{RecommendedTrack, Seed, TimeWindow, TopArtist, TopTrack};
use errors::Result;

/// The capability set the profile and recommendation code needs from a
/// streaming service: top artists, top tracks and seeded recommendations.
///
/// `SpotifyClient` is the production implementation; tests substitute an
/// in-memory fake so no network traffic is needed.
pub trait MusicService {
    /// The current user's most played artists for the given window,
    /// in the order the service ranks them.
    async fn top_artists(&self, limit: u32, window: TimeWindow) -> Result<Vec<TopArtist>>;

    /// The current user's most played tracks for the given window.
    async fn top_tracks(&self, limit: u32, window: TimeWindow) -> Result<Vec<TopTrack>>;

    /// Tracks recommended from exactly one seed category.
    async fn recommendations(&self, seed: &Seed, limit: u32) -> Result<Vec<RecommendedTrack>>;
}
