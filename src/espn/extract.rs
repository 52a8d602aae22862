//! Leader extraction: category listing -> one denormalized leader.

use serde_json::Number;
use tracing::warn;

use super::http::EspnClient;
use super::types::{Athlete, Category, Team};
use crate::cli::types::StatType;
use crate::error::{LeadersError, Result};

#[cfg(test)]
mod tests;

/// A fully dereferenced leader, before season/week are stamped on by the
/// ingestion run.
#[derive(Debug, Clone)]
pub struct ExtractedLeader {
    pub stat_display_name: String,
    pub value: Number,
    pub display_value: String,
    pub athlete: Athlete,
    pub team: Team,
}

/// Locate the top-ranked leader for `stat` and resolve it into a full record.
///
/// Categories are scanned in source order and the first name match wins; the
/// listing is not assumed sorted or deduplicated. A missing category or an
/// empty leaders list is `Ok(None)` -- absence of data for a stat in a given
/// week is an expected state, not an error. The top entry's ordering is
/// trusted (the source ranks descending by value); no re-sort happens here.
///
/// Both the athlete and team references must resolve. A missing reference or
/// a resolution failure fails the extraction: partial leader records are
/// never produced.
pub async fn extract_leader(
    client: &EspnClient,
    categories: &[Category],
    stat: StatType,
) -> Result<Option<ExtractedLeader>> {
    let Some(category) = categories.iter().find(|c| c.name == stat.espn_name()) else {
        warn!(stat = stat.espn_name(), "stat not found in categories");
        return Ok(None);
    };

    let Some(leader) = category.leaders.first() else {
        warn!(stat = stat.espn_name(), "no leaders listed for stat");
        return Ok(None);
    };

    let athlete_ref = leader.athlete.as_ref().ok_or_else(|| {
        LeadersError::extraction(stat.espn_name(), "leader entry has no athlete reference")
    })?;
    let team_ref = leader.team.as_ref().ok_or_else(|| {
        LeadersError::extraction(stat.espn_name(), "leader entry has no team reference")
    })?;

    let athlete = client.resolve_athlete(athlete_ref).await?;
    let team = client.resolve_team(team_ref).await?;

    Ok(Some(ExtractedLeader {
        stat_display_name: category.display_name.clone(),
        value: leader.value.clone(),
        display_value: leader.display_value.clone(),
        athlete,
        team,
    }))
}
