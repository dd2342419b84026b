//! Spotify implementation of the [`MusicService`] capability set.
//!
//! OAuth, HTTP transport and JSON parsing are delegated to `rspotify`;
//! this module only maps its models into crate entities.

use std::path::PathBuf;

use log::debug;
use rspotify::{
    AuthCodeSpotify, Config, Credentials, OAuth,
    model::{ArtistId, FullArtist, FullTrack, RecommendationsAttribute, TimeRange, TrackId},
    prelude::*,
    scopes,
};

use crate::clients::{
    MusicService,
    entities::{ArtistCredit, RecommendedTrack, Seed, TimeWindow, TopArtist, TopTrack},
    errors::{Error, Result},
};

impl From<TimeWindow> for TimeRange {
    fn from(window: TimeWindow) -> TimeRange {
        match window {
            TimeWindow::ShortTerm => TimeRange::ShortTerm,
            TimeWindow::MediumTerm => TimeRange::MediumTerm,
            TimeWindow::LongTerm => TimeRange::LongTerm,
        }
    }
}

impl From<FullArtist> for TopArtist {
    fn from(artist: FullArtist) -> TopArtist {
        TopArtist {
            id: artist.id.id().to_string(),
            name: artist.name,
            genres: artist.genres,
        }
    }
}

impl From<FullTrack> for RecommendedTrack {
    fn from(track: FullTrack) -> RecommendedTrack {
        let album = track.album;
        let names = album.artists.into_iter().map(|a| a.name).collect();
        RecommendedTrack {
            name: track.name,
            album: album.name,
            artists: ArtistCredit::from_names(names),
        }
    }
}

/// Authorized Spotify client.
pub struct SpotifyClient {
    /// Underlying `rspotify` authorization-code client
    pub spotify: AuthCodeSpotify,
}

impl SpotifyClient {
    /// Wraps an already configured `rspotify` client.
    pub fn new(spotify: AuthCodeSpotify) -> Self {
        SpotifyClient { spotify }
    }

    /// Creates a `SpotifyClient` from environment variables or raises a
    /// configuration error.
    pub fn try_default() -> Result<Self> {
        let creds = Credentials::from_env().ok_or_else(|| {
            Error::Configuration(
                "Missing Spotify credentials in environment variables (RSPOTIFY_CLIENT_ID, RSPOTIFY_CLIENT_SECRET)".into(),
            )
        })?;
        let oauth = OAuth::from_env(scopes!("user-top-read")).ok_or_else(|| {
            Error::Configuration(
                "Missing Spotify OAuth configuration in environment variables (RSPOTIFY_REDIRECT_URI)".into(),
            )
        })?;

        // Cache the token so repeated runs skip the browser prompt
        let cache_path = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp")) // Fallback to /tmp if cache directory can't be determined
            .join(".tasteseed_token_cache");

        let spotify = AuthCodeSpotify::with_config(
            creds,
            oauth,
            Config {
                token_cached: true,
                cache_path,
                ..Default::default()
            },
        );

        Ok(Self { spotify })
    }

    /// Authorizes the client via CLI prompt and OAuth flow.
    /// This function requires the rspotify `cli` feature enabled.
    pub async fn authorize_client(&self) -> Result<()> {
        debug!("Starting Spotify authorization ...");
        let url = self.spotify.get_authorize_url(false)?;
        self.spotify
            .prompt_for_token(&url)
            .await
            .map_err(|e| Error::Authentication(e.to_string()))?;
        let user = self
            .spotify
            .me()
            .await
            .map_err(|e| Error::Authentication(e.to_string()))?;
        debug!("Authenticated as user: {:?}", user.display_name);
        Ok(())
    }
}

impl MusicService for SpotifyClient {
    async fn top_artists(&self, limit: u32, window: TimeWindow) -> Result<Vec<TopArtist>> {
        let page = self
            .spotify
            .current_user_top_artists_manual(Some(window.into()), Some(limit), Some(0))
            .await?;
        Ok(page.items.into_iter().map(TopArtist::from).collect())
    }

    async fn top_tracks(&self, limit: u32, window: TimeWindow) -> Result<Vec<TopTrack>> {
        let page = self
            .spotify
            .current_user_top_tracks_manual(Some(window.into()), Some(limit), Some(0))
            .await?;

        let mut tracks = Vec::with_capacity(page.items.len());
        for track in page.items {
            let id = track
                .id
                .as_ref()
                .map(|id| id.id().to_string())
                .ok_or_else(|| {
                    Error::DataShape(format!("top track {:?} has no id", track.name))
                })?;
            tracks.push(TopTrack { id, name: track.name });
        }
        Ok(tracks)
    }

    async fn recommendations(&self, seed: &Seed, limit: u32) -> Result<Vec<RecommendedTrack>> {
        let recommended = match seed {
            Seed::Artists(ids) => {
                let seed_artists = ids
                    .iter()
                    .map(|id| ArtistId::from_id(id.as_str()))
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                self.spotify
                    .recommendations(
                        std::iter::empty::<RecommendationsAttribute>(),
                        Some(seed_artists),
                        None::<Vec<&str>>,
                        None::<Vec<TrackId>>,
                        None,
                        Some(limit),
                    )
                    .await?
            }
            Seed::Tracks(ids) => {
                let seed_tracks = ids
                    .iter()
                    .map(|id| TrackId::from_id(id.as_str()))
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                self.spotify
                    .recommendations(
                        std::iter::empty::<RecommendationsAttribute>(),
                        None::<Vec<ArtistId>>,
                        None::<Vec<&str>>,
                        Some(seed_tracks),
                        None,
                        Some(limit),
                    )
                    .await?
            }
            Seed::Genres(names) => {
                self.spotify
                    .recommendations(
                        std::iter::empty::<RecommendationsAttribute>(),
                        None::<Vec<ArtistId>>,
                        Some(names.iter().map(String::as_str)),
                        None::<Vec<TrackId>>,
                        None,
                        Some(limit),
                    )
                    .await?
            }
        };

        // The recommendation payload carries simplified tracks without
        // album data, so hydrate full tracks before rendering.
        let ids: Vec<TrackId> = recommended
            .tracks
            .iter()
            .filter_map(|t| t.id.clone())
            .collect();

        let mut tracks = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(50) {
            let full = self.spotify.tracks(chunk.iter().cloned(), None).await?;
            tracks.extend(full.into_iter().map(RecommendedTrack::from));
        }
        debug!("Hydrated {} recommended tracks", tracks.len());
        Ok(tracks)
    }
}
