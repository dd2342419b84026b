//! Data entities shared between the service clients and the core logic.

use std::fmt;

use clap::ValueEnum;

/// Lookback period over which the service computes "top" listening
/// statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeWindow {
    /// Roughly the last four weeks
    ShortTerm,
    /// Roughly the last six months
    #[default]
    MediumTerm,
    /// Several years of listening history
    LongTerm,
}

/// Profile category used to seed the recommendation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedType {
    /// Seed from the top artist ids
    Artist,
    /// Seed from the top track ids
    Track,
    /// Seed from the aggregated top genres
    Genre,
}

/// One seed category with its values. The recommendation endpoint accepts
/// exactly one populated category per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// Artist ids
    Artists(Vec<String>),
    /// Track ids
    Tracks(Vec<String>),
    /// Genre names
    Genres(Vec<String>),
}

/// A top-ranked artist with its genre tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopArtist {
    /// Service id of the artist
    pub id: String,
    /// Display name
    pub name: String,
    /// Genre tags attached to the artist, in service order
    pub genres: Vec<String>,
}

/// A top-ranked track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopTrack {
    /// Service id of the track
    pub id: String,
    /// Display name
    pub name: String,
}

/// Album artist credit in display shape: a bare name when exactly one
/// artist is credited, otherwise the ordered sequence of names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistCredit {
    /// A single credited artist
    One(String),
    /// Two or more credited artists (or none), in credit order
    Many(Vec<String>),
}

impl ArtistCredit {
    /// Builds a credit from credited names, collapsing a single entry to
    /// the scalar shape.
    pub fn from_names(mut names: Vec<String>) -> Self {
        if names.len() == 1 {
            ArtistCredit::One(names.remove(0))
        } else {
            ArtistCredit::Many(names)
        }
    }
}

impl fmt::Display for ArtistCredit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtistCredit::One(name) => f.write_str(name),
            ArtistCredit::Many(names) => f.write_str(&names.join(", ")),
        }
    }
}

/// A recommended track ready for console rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendedTrack {
    /// Track title
    pub name: String,
    /// Album title
    pub album: String,
    /// Album artist credit
    pub artists: ArtistCredit,
}
