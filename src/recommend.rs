//! Requests seeded recommendations and renders them for the console.

use log::{debug, info};

use crate::clients::{
    MusicService,
    entities::{RecommendedTrack, Seed, SeedType, TimeWindow},
    errors::Result,
};
use crate::profile;

/// Runs the two-step pipeline: build the taste profile, then request and
/// render recommendations seeded from one profile category.
pub struct Recommender<S> {
    /// Authorized service client
    pub service: S,
}

impl<S: MusicService> Recommender<S> {
    /// Wraps an authorized service client.
    pub fn new(service: S) -> Self {
        Recommender { service }
    }

    /// Prints one line per recommended track to stdout. Nothing is
    /// printed if either network step fails.
    pub async fn recommend(
        &self,
        seed_type: SeedType,
        limit: u32,
        window: TimeWindow,
    ) -> Result<()> {
        let lines = self.recommend_lines(seed_type, limit, window).await?;
        info!("Got {} recommended tracks", lines.len());
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }

    /// Builds the rendered recommendation lines without printing them.
    pub async fn recommend_lines(
        &self,
        seed_type: SeedType,
        limit: u32,
        window: TimeWindow,
    ) -> Result<Vec<String>> {
        let profile = profile::build_profile(&self.service, window).await?;
        debug!("Taste profile: {profile:?}");

        let seed = match seed_type {
            SeedType::Artist => Seed::Artists(profile.artist_ids),
            SeedType::Track => Seed::Tracks(profile.track_ids),
            SeedType::Genre => Seed::Genres(profile.top_genres),
        };

        let tracks = self.service.recommendations(&seed, limit).await?;
        Ok(tracks
            .iter()
            .enumerate()
            .map(|(index, track)| render_line(index, track))
            .collect())
    }
}

/// Renders one console line, e.g. `0 Title – Artist ( Album: Name )`.
/// Multiple credited artists are joined with a comma and space.
pub fn render_line(index: usize, track: &RecommendedTrack) -> String {
    format!(
        "{} {} – {} ( Album: {} )",
        index, track.name, track.artists, track.album
    )
}
