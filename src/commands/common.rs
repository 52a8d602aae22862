//! Shared wiring between CLI commands: season/env resolution, client and
//! database construction.

use std::path::PathBuf;

use crate::cli::types::Season;
use crate::error::Result;
use crate::espn::EspnClient;
use crate::storage::LeaderDatabase;
use crate::{BASE_URL_ENV_VAR, SEASON_ENV_VAR};

/// CLI flag wins, then `NFL_LEADERS_SEASON`, then the default season.
pub fn resolve_season(cli_season: Option<Season>) -> Season {
    cli_season
        .or_else(|| {
            std::env::var(SEASON_ENV_VAR)
                .ok()
                .and_then(|raw| raw.parse().ok())
        })
        .unwrap_or_default()
}

/// Build the ESPN client, honoring `--base-url` / `ESPN_API_BASE_URL`.
pub fn build_client(base_url: Option<String>) -> Result<EspnClient> {
    match base_url.or_else(|| std::env::var(BASE_URL_ENV_VAR).ok()) {
        Some(url) => EspnClient::with_base_url(url),
        None => EspnClient::new(),
    }
}

/// Open the database at the given path, or the platform default.
pub fn open_database(path: Option<PathBuf>) -> Result<LeaderDatabase> {
    match path {
        Some(path) => LeaderDatabase::open(&path),
        None => LeaderDatabase::new(),
    }
}
