//! Upsert and read queries over the leaders table

use rusqlite::{params, Row};
use serde_json::Number;
use std::str::FromStr;

use super::{models::LeaderRecord, schema::LeaderDatabase};
use crate::cli::types::{Season, StatType, Week};
use crate::error::Result;

const RECORD_COLUMNS: &str = "season, week, stat_type, stat_display_name,
       player_id, player_name, player_short_name,
       team_id, team_name, team_abbreviation,
       stat_value, stat_display_value, updated_at";

impl LeaderDatabase {
    /// Insert or replace the leader for (season, week, stat type).
    ///
    /// The key is derived from the record itself, so re-running ingestion
    /// for an already-processed week overwrites the prior row in place
    /// (last-write-wins, no versioning).
    pub fn upsert_leader(&mut self, record: &LeaderRecord) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO leaders
             (season, week, stat_type, stat_display_name,
              player_id, player_name, player_short_name,
              team_id, team_name, team_abbreviation,
              stat_value, stat_display_value, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                record.season.as_u16(),
                record.week.as_u8(),
                record.stat_type.storage_key(),
                record.stat_display_name,
                record.player_id,
                record.player_name,
                record.player_short_name,
                record.team_id,
                record.team_name,
                record.team_abbreviation,
                record.value.to_string(),
                record.display_value,
                record.updated_at,
            ],
        )?;
        Ok(())
    }

    /// All stat records for one (season, week).
    pub fn leaders_for_week(&self, season: Season, week: Week) -> Result<Vec<LeaderRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM leaders
             WHERE season = ? AND week = ?
             ORDER BY stat_type"
        ))?;

        let rows = stmt.query_map(params![season.as_u16(), week.as_u8()], row_to_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Highest week number with any record for the season.
    pub fn max_week(&self, season: Season) -> Result<Option<Week>> {
        let max: Option<u8> = self.conn.query_row(
            "SELECT MAX(week) FROM leaders WHERE season = ?",
            params![season.as_u16()],
            |row| row.get(0),
        )?;
        Ok(max.map(Week::new))
    }

    /// Every record for the season, ordered by week then stat type.
    pub fn season_leaders(&self, season: Season) -> Result<Vec<LeaderRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM leaders
             WHERE season = ?
             ORDER BY week, stat_type"
        ))?;

        let rows = stmt.query_map(params![season.as_u16()], row_to_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// One stat across all weeks of the season, week ascending.
    ///
    /// Served by the `idx_leaders_stat_type` index, the analogue of the
    /// original stat-type GSI.
    pub fn stat_history(&self, season: Season, stat_type: StatType) -> Result<Vec<LeaderRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM leaders
             WHERE stat_type = ? AND season = ?
             ORDER BY week"
        ))?;

        let rows = stmt.query_map(
            params![stat_type.storage_key(), season.as_u16()],
            row_to_record,
        )?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

fn row_to_record(row: &Row) -> rusqlite::Result<LeaderRecord> {
    let stat_type_text: String = row.get(2)?;
    let stat_type = StatType::from_str(&stat_type_text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let value_text: String = row.get(10)?;
    let value: Number = serde_json::from_str(&value_text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(10, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(LeaderRecord {
        season: Season::new(row.get(0)?),
        week: Week::new(row.get(1)?),
        stat_type,
        stat_display_name: row.get(3)?,
        player_id: row.get(4)?,
        player_name: row.get(5)?,
        player_short_name: row.get(6)?,
        team_id: row.get(7)?,
        team_name: row.get(8)?,
        team_abbreviation: row.get(9)?,
        value,
        display_value: row.get(11)?,
        updated_at: row.get(12)?,
    })
}
