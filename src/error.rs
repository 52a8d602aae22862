//! Error types for the NFL leaders service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeadersError>;

#[derive(Error, Debug)]
pub enum LeadersError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store operation failed: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("failed to resolve reference {url}: {source}")]
    Resolution {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to extract {stat} leader: {message}")]
    Extraction { stat: String, message: String },

    #[error("ingestion failed: {message}")]
    Ingestion { message: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("could not determine data directory")]
    NoDataDir,
}

impl LeadersError {
    /// Bad client input (maps to HTTP 400).
    pub fn validation(message: impl Into<String>) -> Self {
        LeadersError::Validation {
            message: message.into(),
        }
    }

    /// Valid query, zero matching records (maps to HTTP 404).
    pub fn not_found(message: impl Into<String>) -> Self {
        LeadersError::NotFound {
            message: message.into(),
        }
    }

    pub fn extraction(stat: impl Into<String>, message: impl Into<String>) -> Self {
        LeadersError::Extraction {
            stat: stat.into(),
            message: message.into(),
        }
    }

    pub fn ingestion(message: impl Into<String>) -> Self {
        LeadersError::Ingestion {
            message: message.into(),
        }
    }
}
