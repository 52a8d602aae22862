//! Week-numbering policy.
//!
//! No authoritative mapping from a calendar date to the in-season NFL week
//! exists in the provider data, so the derivation is a pluggable policy
//! rather than a constant buried in the orchestrator.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::cli::types::{Season, Week};

/// Strategy for deriving the current week when the caller does not supply
/// one explicitly.
///
/// Policies are shared across async request handlers, so implementations
/// must be thread-safe.
pub trait WeekPolicy: Send + Sync {
    fn current_week(&self, today: NaiveDate) -> Week;
}

/// Date-based estimate: elapsed 7-day periods since the season opener,
/// taken as the first Thursday of September of the season year, clamped
/// to weeks 1-18.
#[derive(Debug, Clone)]
pub struct CalendarWeekEstimate {
    season_start: NaiveDate,
}

impl CalendarWeekEstimate {
    pub fn for_season(season: Season) -> Self {
        let year = i32::from(season.as_u16());
        let september_first =
            NaiveDate::from_ymd_opt(year, 9, 1).expect("September 1 exists in every year");
        let days_until_thursday = (Weekday::Thu.num_days_from_monday() + 7
            - september_first.weekday().num_days_from_monday())
            % 7;
        Self {
            season_start: september_first + Duration::days(i64::from(days_until_thursday)),
        }
    }

    pub fn season_start(&self) -> NaiveDate {
        self.season_start
    }
}

impl WeekPolicy for CalendarWeekEstimate {
    fn current_week(&self, today: NaiveDate) -> Week {
        if today < self.season_start {
            return Week::new(Week::MIN);
        }
        let elapsed_weeks = today.signed_duration_since(self.season_start).num_days() / 7 + 1;
        let clamped = elapsed_weeks.clamp(i64::from(Week::MIN), i64::from(Week::MAX));
        Week::new(clamped as u8)
    }
}

/// Always answers with one fixed week. Used by tests and anywhere a run
/// must be pinned to a known week without going through the estimate.
#[derive(Debug, Clone, Copy)]
pub struct FixedWeek(pub Week);

impl WeekPolicy for FixedWeek {
    fn current_week(&self, _today: NaiveDate) -> Week {
        self.0
    }
}
