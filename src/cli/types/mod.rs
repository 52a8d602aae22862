//! Type-safe wrappers and enums shared across the CLI, store, and API.

pub mod stat;
pub mod time;

pub use stat::StatType;
pub use time::{Season, Week};
