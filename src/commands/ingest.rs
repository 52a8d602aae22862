//! `ingest` and `backfill` command handlers.

use std::path::PathBuf;

use tracing::warn;

use super::common::{build_client, open_database, resolve_season};
use crate::cli::types::{Season, Week};
use crate::error::{LeadersError, Result};
use crate::ingest::{run_ingestion, CalendarWeekEstimate};

/// Run a single ingestion pass and print what was stored.
pub async fn handle_ingest(
    season: Option<Season>,
    week: Option<Week>,
    db_path: Option<PathBuf>,
    base_url: Option<String>,
) -> Result<()> {
    let season = resolve_season(season);
    let client = build_client(base_url)?;
    let mut db = open_database(db_path)?;
    let policy = CalendarWeekEstimate::for_season(season);

    let report = run_ingestion(&client, &mut db, season, week, &policy).await?;

    println!(
        "Ingested {} leader(s) for season {} week {}:",
        report.leaders.len(),
        report.season,
        report.week
    );
    for summary in &report.leaders {
        println!(
            "  {} - {} ({}) - {}",
            summary.stat_type, summary.player, summary.team, summary.value
        );
    }

    Ok(())
}

/// Re-run ingestion for every week in `[from_week, to_week]`.
///
/// Best-effort: a failed week is logged and the loop continues, so one bad
/// week does not block the rest of the range. Fails only if the range
/// itself is invalid or no week succeeded.
pub async fn handle_backfill(
    season: Option<Season>,
    from_week: Week,
    to_week: Week,
    db_path: Option<PathBuf>,
    base_url: Option<String>,
) -> Result<()> {
    let from_week = from_week.validate()?;
    let to_week = to_week.validate()?;
    if from_week > to_week {
        return Err(LeadersError::validation(format!(
            "Backfill range is empty: {from_week} > {to_week}"
        )));
    }

    let season = resolve_season(season);
    let client = build_client(base_url)?;
    let mut db = open_database(db_path)?;
    let policy = CalendarWeekEstimate::for_season(season);

    let mut succeeded = 0usize;
    for week in from_week.as_u8()..=to_week.as_u8() {
        let week = Week::new(week);
        match run_ingestion(&client, &mut db, season, Some(week), &policy).await {
            Ok(report) => {
                succeeded += 1;
                println!(
                    "Week {}: stored {} leader(s)",
                    report.week,
                    report.leaders.len()
                );
            }
            Err(err) => {
                warn!(%week, %err, "backfill week failed, continuing");
                println!("Week {week}: failed ({err})");
            }
        }
    }

    if succeeded == 0 {
        return Err(LeadersError::ingestion(format!(
            "backfill stored nothing for weeks {from_week}-{to_week}"
        )));
    }

    println!(
        "Backfill complete: {succeeded}/{} week(s) succeeded",
        to_week.as_u8() - from_week.as_u8() + 1
    );
    Ok(())
}
