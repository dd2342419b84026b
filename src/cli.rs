//! Command line parsing and dispatch.

use clap::{Parser, Subcommand};
use log::info;
use tasteseed::clients::SpotifyClient;
use tasteseed::clients::entities::{SeedType, TimeWindow};
use tasteseed::clients::errors::Result;
use tasteseed::recommend::Recommender;

#[derive(Parser)]
#[command(name = "tasteseed")]
#[command(version, about = "Recommend Spotify tracks seeded from your top artists, tracks and genres", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print recommended tracks for the current user
    Recommend {
        /// Seed category taken from the taste profile
        #[arg(long, value_enum, default_value = "genre")]
        seed_type: SeedType,

        /// Number of tracks to request
        #[arg(long, default_value = "50", value_parser = clap::value_parser!(u32).range(1..=100))]
        limit: u32,

        /// Lookback window for the top-item statistics
        #[arg(long, value_enum, default_value = "medium-term")]
        time_range: TimeWindow,
    },
}

/// Parses arguments and runs the selected command.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            seed_type,
            limit,
            time_range,
        } => recommend_tracks(seed_type, limit, time_range).await,
    }
}

async fn recommend_tracks(seed_type: SeedType, limit: u32, time_range: TimeWindow) -> Result<()> {
    let spotify = SpotifyClient::try_default()?;
    info!("Authorizing Spotify client ...");
    // A CLI prompt may be shown on this call
    spotify.authorize_client().await?;

    let recommender = Recommender::new(spotify);
    recommender.recommend(seed_type, limit, time_range).await
}
