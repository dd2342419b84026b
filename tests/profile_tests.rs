use tasteseed::clients::MusicService;
use tasteseed::clients::entities::{
    RecommendedTrack, Seed, TimeWindow, TopArtist, TopTrack,
};
use tasteseed::clients::errors::Result;
use tasteseed::profile::{TOP_ITEM_LIMIT, build_profile, genre_frequency, rank_genres};

fn artist(id: &str, genres: &[&str]) -> TopArtist {
    TopArtist {
        id: id.to_string(),
        name: id.to_uppercase(),
        genres: genres.iter().map(ToString::to_string).collect(),
    }
}

fn track(id: &str) -> TopTrack {
    TopTrack {
        id: id.to_string(),
        name: id.to_uppercase(),
    }
}

struct FakeService {
    artists: Vec<TopArtist>,
    tracks: Vec<TopTrack>,
}

impl MusicService for FakeService {
    async fn top_artists(&self, limit: u32, _window: TimeWindow) -> Result<Vec<TopArtist>> {
        Ok(self.artists.iter().take(limit as usize).cloned().collect())
    }

    async fn top_tracks(&self, limit: u32, _window: TimeWindow) -> Result<Vec<TopTrack>> {
        Ok(self.tracks.iter().take(limit as usize).cloned().collect())
    }

    async fn recommendations(&self, _seed: &Seed, _limit: u32) -> Result<Vec<RecommendedTrack>> {
        Ok(Vec::new())
    }
}

#[test]
fn counts_genres_in_first_seen_order() {
    // Fixture pinned by input order: a appears three times, b and c once.
    let artists = vec![artist("a1", &["a", "a", "b"]), artist("a2", &["a", "c"])];

    let counts = genre_frequency(&artists);
    assert_eq!(
        counts,
        vec![
            ("a".to_string(), 3),
            ("b".to_string(), 1),
            ("c".to_string(), 1),
        ]
    );
}

#[test]
fn ranks_by_descending_count_with_stable_ties() {
    let artists = vec![artist("a1", &["a", "a", "b"]), artist("a2", &["a", "c"])];

    // b and c tie at one occurrence; b was seen first, so it stays ahead.
    assert_eq!(rank_genres(&artists, 5), vec!["a", "b", "c"]);
}

#[test]
fn all_equal_counts_keep_first_seen_order() {
    let artists = vec![
        artist("a1", &["shoegaze", "dream pop"]),
        artist("a2", &["post rock", "ambient"]),
    ];

    assert_eq!(
        rank_genres(&artists, 5),
        vec!["shoegaze", "dream pop", "post rock", "ambient"]
    );
}

#[test]
fn ranking_is_capped() {
    let artists = vec![
        artist("a1", &["g1", "g2", "g3", "g4"]),
        artist("a2", &["g5", "g6", "g7", "g8"]),
    ];

    assert_eq!(rank_genres(&artists, 5).len(), 5);
}

#[test]
fn no_genres_yields_empty_ranking() {
    let artists = vec![artist("a1", &[]), artist("a2", &[])];

    assert!(rank_genres(&artists, 5).is_empty());
}

#[tokio::test]
async fn profile_preserves_service_order() {
    let service = FakeService {
        artists: vec![
            artist("ar1", &["indie rock"]),
            artist("ar2", &["indie rock", "shoegaze"]),
            artist("ar3", &["shoegaze"]),
        ],
        tracks: vec![track("tr1"), track("tr2")],
    };

    let profile = build_profile(&service, TimeWindow::default()).await.unwrap();
    assert_eq!(profile.artist_ids, vec!["ar1", "ar2", "ar3"]);
    assert_eq!(profile.track_ids, vec!["tr1", "tr2"]);
    assert_eq!(profile.top_genres, vec!["indie rock", "shoegaze"]);
}

#[tokio::test]
async fn profile_lists_never_exceed_limit() {
    let many_artists = (0..10)
        .map(|i| artist(&format!("ar{i}"), &["pop"]))
        .collect();
    let many_tracks = (0..10).map(|i| track(&format!("tr{i}"))).collect();
    let service = FakeService {
        artists: many_artists,
        tracks: many_tracks,
    };

    let profile = build_profile(&service, TimeWindow::ShortTerm).await.unwrap();
    assert_eq!(profile.artist_ids.len(), TOP_ITEM_LIMIT as usize);
    assert_eq!(profile.track_ids.len(), TOP_ITEM_LIMIT as usize);
    assert!(profile.top_genres.len() <= TOP_ITEM_LIMIT as usize);
}
