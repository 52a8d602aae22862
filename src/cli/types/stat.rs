//! Tracked defensive statistic categories.

use crate::error::{LeadersError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumerated defensive statistic tracked by the service.
///
/// Each stat maps to two names: the storage key used in the database and
/// the read API (`TOTAL_TACKLES`), and the category name the ESPN Core API
/// uses in its leaders listing (`totalTackles`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    #[serde(rename = "TOTAL_TACKLES")]
    TotalTackles,
    #[serde(rename = "SACKS")]
    Sacks,
}

impl StatType {
    /// All stats ingested on every run, in ingestion order.
    pub const ALL: [StatType; 2] = [StatType::TotalTackles, StatType::Sacks];

    /// Key used for persistence and in client-facing payloads.
    pub fn storage_key(&self) -> &'static str {
        match self {
            StatType::TotalTackles => "TOTAL_TACKLES",
            StatType::Sacks => "SACKS",
        }
    }

    /// Category name in the ESPN leaders listing.
    pub fn espn_name(&self) -> &'static str {
        match self {
            StatType::TotalTackles => "totalTackles",
            StatType::Sacks => "sacks",
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.storage_key())
    }
}

impl FromStr for StatType {
    type Err = LeadersError;

    /// Parse a storage key, case-insensitively (API paths arrive lowercase).
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "TOTAL_TACKLES" => Ok(StatType::TotalTackles),
            "SACKS" => Ok(StatType::Sacks),
            _ => Err(LeadersError::validation(format!(
                "Invalid stat type. Must be: TOTAL_TACKLES, SACKS (got {s})"
            ))),
        }
    }
}
