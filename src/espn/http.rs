//! HTTP client for the ESPN Core API.
//!
//! One client instance is built per invocation and passed into the
//! components that need it; the base URL is injectable so tests can point
//! it at a mock server.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::types::{Athlete, LeadersDocument, Reference, Team};
use crate::cli::types::Season;
use crate::error::{LeadersError, Result};

#[cfg(test)]
mod tests;

/// Base path for the ESPN Core API (NFL).
pub const ESPN_CORE_BASE_URL: &str =
    "https://sports.core.api.espn.com/v2/sports/football/leagues/nfl";

const LISTING_TIMEOUT: Duration = Duration::from_secs(30);
const REFERENCE_TIMEOUT: Duration = Duration::from_secs(10);

/// ESPN Core API client: leaders listing fetch plus reference resolution.
#[derive(Debug, Clone)]
pub struct EspnClient {
    client: Client,
    base_url: String,
}

impl EspnClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(ESPN_CORE_BASE_URL)
    }

    /// Build a client against a custom base URL (mock servers in tests,
    /// or the `ESPN_API_BASE_URL` override).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(LISTING_TIMEOUT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the season leaders listing (one call per ingestion run).
    pub async fn fetch_leaders(&self, season: Season) -> Result<LeadersDocument> {
        let url = format!("{}/seasons/{}/types/2/leaders", self.base_url, season);
        tracing::debug!(%url, "fetching leaders listing");

        let document = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<LeadersDocument>()
            .await?;

        Ok(document)
    }

    /// Resolve a `$ref` pointer into its full entity.
    ///
    /// Single GET with a bounded timeout; no retries and no caching. Any
    /// failure (network, timeout, non-2xx, bad body) becomes a
    /// `Resolution` error carrying the pointer.
    pub async fn resolve<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let result: std::result::Result<T, reqwest::Error> = async {
            self.client
                .get(url)
                .timeout(REFERENCE_TIMEOUT)
                .send()
                .await?
                .error_for_status()?
                .json::<T>()
                .await
        }
        .await;

        result.map_err(|source| LeadersError::Resolution {
            url: url.to_string(),
            source,
        })
    }

    pub async fn resolve_athlete(&self, reference: &Reference) -> Result<Athlete> {
        self.resolve(&reference.href).await
    }

    pub async fn resolve_team(&self, reference: &Reference) -> Result<Team> {
        self.resolve(&reference.href).await
    }
}
