//! Ingestion orchestration: one run fetches the leaders listing, extracts
//! each tracked stat, and upserts one record per (season, week, stat).

pub mod week;


use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::types::{Season, StatType, Week};
use crate::error::{LeadersError, Result};
use crate::espn::{extract_leader, EspnClient};
use crate::storage::{LeaderDatabase, LeaderRecord, StoredSummary};

pub use week::{CalendarWeekEstimate, FixedWeek, WeekPolicy};

/// Outcome of one ingestion run.
#[derive(Debug, Clone, Serialize)]
pub struct IngestionReport {
    pub season: Season,
    pub week: Week,
    pub leaders: Vec<StoredSummary>,
}

/// Run one ingestion pass for `season`.
///
/// The listing is fetched once; an empty category list fails the run. Every
/// tracked stat is extracted before anything is persisted: a stat with no
/// leader in the listing, or an extraction/resolution failure, aborts the
/// run with nothing written. A successful run always stores all tracked
/// stats together -- partial ingestion is a hard failure, never a partial
/// write.
///
/// `explicit_week` wins when supplied (0 stamps records as season
/// aggregates); otherwise `policy` derives the week from today's date.
pub async fn run_ingestion(
    client: &EspnClient,
    db: &mut LeaderDatabase,
    season: Season,
    explicit_week: Option<Week>,
    policy: &dyn WeekPolicy,
) -> Result<IngestionReport> {
    info!(%season, "starting leaders ingestion");

    let document = client.fetch_leaders(season).await?;
    if document.categories.is_empty() {
        return Err(LeadersError::ingestion(
            "leaders listing returned no categories",
        ));
    }

    let week = explicit_week.unwrap_or_else(|| policy.current_week(Utc::now().date_naive()));
    let updated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    // Extraction phase: all tracked stats must yield a full leader before
    // the store is touched.
    let mut extracted = Vec::new();
    for stat in StatType::ALL {
        let Some(leader) = extract_leader(client, &document.categories, stat).await? else {
            warn!(stat = %stat, %week, "no leader available for tracked stat");
            return Err(LeadersError::ingestion(format!(
                "no {} leader in listing",
                stat.espn_name()
            )));
        };
        extracted.push((stat, leader));
    }

    let mut summaries = Vec::new();
    for (stat, leader) in extracted {
        let record = LeaderRecord {
            season,
            week,
            stat_type: stat,
            stat_display_name: leader.stat_display_name,
            player_id: leader.athlete.id,
            player_name: leader.athlete.display_name,
            player_short_name: leader.athlete.short_name,
            team_id: leader.team.id,
            team_name: leader.team.display_name,
            team_abbreviation: leader.team.abbreviation,
            value: leader.value,
            display_value: leader.display_value,
            updated_at: updated_at.clone(),
        };

        info!(
            stat = %stat,
            player = %record.player_name,
            value = %record.display_value,
            "storing leader"
        );
        db.upsert_leader(&record)?;

        summaries.push(StoredSummary {
            stat_type: stat,
            player: record.player_name,
            team: record.team_abbreviation,
            value: record.display_value,
        });
    }

    info!(%season, %week, stored = summaries.len(), "ingestion complete");

    Ok(IngestionReport {
        season,
        week,
        leaders: summaries,
    })
}
