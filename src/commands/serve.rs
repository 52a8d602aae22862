//! `serve` command handler.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use super::common::{build_client, open_database, resolve_season};
use crate::api::{serve, AppState};
use crate::cli::types::Season;
use crate::error::Result;
use crate::ingest::CalendarWeekEstimate;

/// Open the store, build the router state, bind, and serve until stopped.
pub async fn handle_serve(
    bind: String,
    season: Option<Season>,
    db_path: Option<PathBuf>,
    base_url: Option<String>,
) -> Result<()> {
    let season = resolve_season(season);
    let espn = build_client(base_url)?;
    let db = open_database(db_path)?;
    let week_policy = Arc::new(CalendarWeekEstimate::for_season(season));

    let state = AppState::new(db, espn, season, week_policy);
    let listener = TcpListener::bind(&bind).await?;
    serve(listener, state).await
}
