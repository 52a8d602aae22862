//! Database schema and connection management

use std::path::{Path, PathBuf};

use dirs::data_dir;
use rusqlite::Connection;

use crate::error::{LeadersError, Result};

/// Database connection manager for leader records
pub struct LeaderDatabase {
    pub(crate) conn: Connection,
}

impl LeaderDatabase {
    /// Open the database at the default platform location and ensure the
    /// schema exists.
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path()?)
    }

    /// Open (or create) the database at an explicit path.
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database for tests.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the default path to the database file
    fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or(LeadersError::NoDataDir)?;
        Ok(data_dir.join("nfl-leaders").join("leaders.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // One row per (season, week, stat_type); upserts replace in place.
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS leaders (
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                stat_type TEXT NOT NULL,
                stat_display_name TEXT NOT NULL,
                player_id TEXT NOT NULL,
                player_name TEXT NOT NULL,
                player_short_name TEXT NOT NULL,
                team_id TEXT NOT NULL,
                team_name TEXT NOT NULL,
                team_abbreviation TEXT NOT NULL,
                stat_value TEXT NOT NULL,
                stat_display_value TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (season, week, stat_type)
            )",
            [],
        )?;

        // Secondary access path: one stat across all weeks.
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_leaders_stat_type
             ON leaders(stat_type, season, week)",
            [],
        )?;

        Ok(())
    }
}
