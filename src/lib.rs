//! Tasteseed - Spotify track recommendations seeded from your listening taste
//!
//! This library builds a taste profile (top artists, tracks and genres) from
//! the current user's Spotify listening statistics and requests track
//! recommendations seeded from one profile category.

/// Client modules for interacting with the streaming service
pub mod clients;
/// Taste profile construction from top-item statistics
pub mod profile;
/// Seeded recommendations and console rendering
pub mod recommend;
