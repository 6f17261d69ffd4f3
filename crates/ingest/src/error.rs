//! Typed error enum for the ingestion crate.

use thiserror::Error;

/// Errors fatal to a single ingestion run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("upstream fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("upstream returned HTTP {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("malformed snapshot document: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("storage failure: {0}")]
    Persist(#[source] anyhow::Error),
}
