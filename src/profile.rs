//! Builds the taste profile from the user's top-item statistics.

use log::debug;

use crate::clients::{
    MusicService,
    entities::{TimeWindow, TopArtist},
    errors::Result,
};

/// Fixed query limit for the top-item endpoints. Each profile list is
/// bounded by this value.
pub const TOP_ITEM_LIMIT: u32 = 5;

/// Derived summary of the user's listening taste. Built fresh on every
/// call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TasteProfile {
    /// Top artist ids, in service ranking order
    pub artist_ids: Vec<String>,
    /// Top track ids, in service ranking order
    pub track_ids: Vec<String>,
    /// Top genres, in descending frequency order
    pub top_genres: Vec<String>,
}

/// Fetches top artists and tracks for the window and aggregates the
/// artists' genre tags into a ranked top-genre list.
pub async fn build_profile<S: MusicService>(
    service: &S,
    window: TimeWindow,
) -> Result<TasteProfile> {
    let artists = service.top_artists(TOP_ITEM_LIMIT, window).await?;
    debug!("Fetched {} top artists", artists.len());
    let tracks = service.top_tracks(TOP_ITEM_LIMIT, window).await?;
    debug!("Fetched {} top tracks", tracks.len());

    let top_genres = rank_genres(&artists, TOP_ITEM_LIMIT as usize);

    Ok(TasteProfile {
        artist_ids: artists.into_iter().map(|a| a.id).collect(),
        track_ids: tracks.into_iter().map(|t| t.id).collect(),
        top_genres,
    })
}

/// Counts genre tag occurrences across the artists, keeping first-seen
/// order. The lists are tiny, so a vec beats pulling in a map type that
/// would lose insertion order.
pub fn genre_frequency(artists: &[TopArtist]) -> Vec<(String, u32)> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    for artist in artists {
        for genre in &artist.genres {
            match counts.iter_mut().find(|(name, _)| name == genre) {
                Some((_, count)) => *count += 1,
                None => counts.push((genre.clone(), 1)),
            }
        }
    }
    counts
}

/// Ranks genres by descending count and takes the first `take`. The sort
/// is stable, so genres with equal counts keep first-seen order.
pub fn rank_genres(artists: &[TopArtist], take: usize) -> Vec<String> {
    let mut counts = genre_frequency(artists);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(take).map(|(genre, _)| genre).collect()
}
