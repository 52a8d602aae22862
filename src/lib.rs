//! NFL Defensive Leaders Service
//!
//! Tracks the weekly NFL leaders for total tackles and sacks: an ingestion
//! pipeline pulls the leaders listing from the ESPN Core API, resolves each
//! leader's athlete and team references into a denormalized record, and
//! upserts one record per (season, week, stat) into a local SQLite store;
//! a read API serves the stored records back as JSON.
//!
//! ## Components
//!
//! - **[`espn`]**: typed ESPN Core API client — leaders listing fetch plus
//!   `$ref` pointer resolution, and the leader extraction pipeline
//! - **[`storage`]**: SQLite-backed store keyed by (season, week, stat type)
//!   with idempotent last-write-wins upserts
//! - **[`ingest`]**: per-run orchestration and the pluggable week policy
//! - **[`api`]**: axum read API (`/current`, `/week/{n}`, `/season`,
//!   `/stat/{type}`, `/health`) and the `POST /ingest` trigger
//!
//! ## Quick start
//!
//! ```bash
//! nfl-leaders ingest --season 2025 --week 6
//! nfl-leaders serve --bind 0.0.0.0:8080 --season 2025
//! ```
//!
//! ## Environment configuration
//!
//! ```bash
//! export NFL_LEADERS_SEASON=2025
//! export ESPN_API_BASE_URL=https://sports.core.api.espn.com/v2/sports/football/leagues/nfl
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod espn;
pub mod ingest;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Season, StatType, Week};
pub use error::{LeadersError, Result};

pub const SEASON_ENV_VAR: &str = "NFL_LEADERS_SEASON";
pub const BASE_URL_ENV_VAR: &str = "ESPN_API_BASE_URL";
