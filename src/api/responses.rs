//! Client-facing response shapes for the read API.

use serde::Serialize;
use serde_json::Number;

use crate::cli::types::StatType;
use crate::storage::{LeaderRecord, StoredSummary};

#[derive(Debug, Serialize)]
pub struct PlayerView {
    pub id: String,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Serialize)]
pub struct TeamView {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
}

/// Stable client-facing shape for one stored leader.
#[derive(Debug, Serialize)]
pub struct LeaderView {
    pub stat_type: StatType,
    pub stat_name: String,
    pub player: PlayerView,
    pub team: TeamView,
    pub value: Number,
    pub display_value: String,
    pub updated_at: String,
}

impl From<LeaderRecord> for LeaderView {
    fn from(record: LeaderRecord) -> Self {
        Self {
            stat_type: record.stat_type,
            stat_name: record.stat_display_name,
            player: PlayerView {
                id: record.player_id,
                name: record.player_name,
                short_name: record.player_short_name,
            },
            team: TeamView {
                id: record.team_id,
                name: record.team_name,
                abbreviation: record.team_abbreviation,
            },
            value: record.value,
            display_value: record.display_value,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WeekLeadersBody {
    pub season: String,
    pub week: u8,
    pub leaders: Vec<LeaderView>,
}

#[derive(Debug, Serialize)]
pub struct WeekGroup {
    pub week: u8,
    pub leaders: Vec<LeaderView>,
}

#[derive(Debug, Serialize)]
pub struct SeasonBody {
    pub season: String,
    pub total_weeks: usize,
    pub weeks: Vec<WeekGroup>,
}

#[derive(Debug, Serialize)]
pub struct StatHistoryBody {
    pub season: String,
    pub stat_type: StatType,
    pub total_weeks: usize,
    pub history: Vec<LeaderView>,
}

#[derive(Debug, Serialize)]
pub struct IngestBody {
    pub message: String,
    pub season: String,
    pub week: u8,
    pub leaders: Vec<StoredSummary>,
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
