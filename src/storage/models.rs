//! Data models for the storage layer

use crate::cli::types::{Season, StatType, Week};
use serde::Serialize;
use serde_json::Number;

/// One persisted leader: the top player for a stat in a given
/// (season, week). At most one record exists per (season, week, stat type);
/// re-ingestion replaces it.
#[derive(Debug, Clone)]
pub struct LeaderRecord {
    pub season: Season,
    pub week: Week,
    pub stat_type: StatType,
    pub stat_display_name: String,
    pub player_id: String,
    pub player_name: String,
    pub player_short_name: String,
    pub team_id: String,
    pub team_name: String,
    pub team_abbreviation: String,
    /// Exact decimal value (sacks come in halves, e.g. 9.5).
    pub value: Number,
    pub display_value: String,
    /// RFC 3339 UTC timestamp of the last write.
    pub updated_at: String,
}

/// Short human-readable summary of one stored leader, returned by an
/// ingestion run.
#[derive(Debug, Clone, Serialize)]
pub struct StoredSummary {
    pub stat_type: StatType,
    pub player: String,
    pub team: String,
    pub value: String,
}
