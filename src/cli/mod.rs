//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::{Season, Week};

/// NFL defensive leaders tracker: ingest weekly tackle and sack leaders
/// from the ESPN Core API and serve them back over HTTP.
#[derive(Debug, Parser)]
#[clap(name = "nfl-leaders", version)]
pub struct NflLeaders {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the current leaders from ESPN and upsert them into the store.
    Ingest {
        /// Season year (or set `NFL_LEADERS_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,

        /// Week to stamp onto the stored records (0 = season aggregate).
        /// Omitted: estimated from today's date.
        #[clap(long, short)]
        week: Option<Week>,

        /// Database file path (defaults to the platform data directory).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Override the ESPN API base URL (or set `ESPN_API_BASE_URL`).
        #[clap(long)]
        base_url: Option<String>,
    },

    /// Re-run ingestion for a range of weeks, one run per week.
    ///
    /// Best-effort: a failed week is reported and the remaining weeks
    /// still run.
    Backfill {
        /// Season year (or set `NFL_LEADERS_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,

        /// First week to backfill.
        #[clap(long, default_value_t = Week::new(1))]
        from_week: Week,

        /// Last week to backfill (inclusive).
        #[clap(long)]
        to_week: Week,

        /// Database file path (defaults to the platform data directory).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Override the ESPN API base URL (or set `ESPN_API_BASE_URL`).
        #[clap(long)]
        base_url: Option<String>,
    },

    /// Serve the read API over the stored leaders.
    Serve {
        /// Address to bind.
        #[clap(long, short, default_value = "0.0.0.0:8080")]
        bind: String,

        /// Season served by the read API (or set `NFL_LEADERS_SEASON`).
        #[clap(long, short)]
        season: Option<Season>,

        /// Database file path (defaults to the platform data directory).
        #[clap(long)]
        db: Option<PathBuf>,

        /// Override the ESPN API base URL (or set `ESPN_API_BASE_URL`).
        #[clap(long)]
        base_url: Option<String>,
    },
}
