//! Season and week types for NFL leader tracking.

use crate::error::{LeadersError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = LeadersError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for Week numbers.
///
/// Regular-season weeks run 1 through 18. Week 0 is the sentinel for
/// season-aggregate leaders (totals over the whole season rather than
/// one week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u8);

impl Week {
    /// Sentinel week for season-aggregate records.
    pub const SEASON_TOTAL: Week = Week(0);

    pub const MIN: u8 = 1;
    pub const MAX: u8 = 18;

    pub fn new(week: u8) -> Self {
        Self(week)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn is_season_total(&self) -> bool {
        self.0 == 0
    }

    /// Validate a client-supplied week for query paths.
    ///
    /// The season-aggregate sentinel is not addressable through week
    /// queries; anything outside 1-18 is a validation error, not a
    /// store miss.
    pub fn validate(self) -> Result<Self> {
        if self.0 < Self::MIN || self.0 > Self::MAX {
            return Err(LeadersError::validation(format!(
                "Week must be between {} and {}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(self)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = LeadersError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse()
            .map(Self)
            .map_err(|_| LeadersError::validation(format!("Invalid week number: {s}")))
    }
}
