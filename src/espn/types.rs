//! Typed payloads for the ESPN Core API.
//!
//! The provider's JSON is parsed into these structs at the boundary so that
//! missing fields fail fast with a serde error instead of surfacing as
//! missing-key lookups deep inside extraction.

use serde::{Deserialize, Serialize};
use serde_json::Number;


/// Top-level leaders listing for a season.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadersDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// One statistic category with its ranked leaders.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub leaders: Vec<LeaderEntry>,
}

/// A ranked entry in a category's leaders list.
///
/// The source orders leaders descending by value; the top entry is the
/// leader. Athlete and team arrive as `$ref` pointers that need a follow-up
/// fetch. `value` keeps the exact decimal the provider sent (sacks come in
/// halves, e.g. 9.5).
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderEntry {
    pub value: Number,
    #[serde(rename = "displayValue")]
    pub display_value: String,
    #[serde(default)]
    pub athlete: Option<Reference>,
    #[serde(default)]
    pub team: Option<Reference>,
}

/// Indirect link to a full resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub href: String,
}

/// Resolved athlete resource.
#[derive(Debug, Clone, Deserialize)]
pub struct Athlete {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
}

/// Resolved team resource.
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub abbreviation: String,
}
