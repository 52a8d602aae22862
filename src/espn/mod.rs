//! ESPN Core API integration: typed payloads, HTTP client, and the
//! leader extraction pipeline.

pub mod extract;
pub mod http;
pub mod types;

pub use extract::{extract_leader, ExtractedLeader};
pub use http::{EspnClient, ESPN_CORE_BASE_URL};
