//! Stored row types, constructed at the storage boundary.

use serde::{Deserialize, Serialize};

/// One observation for one neighborhood at one upstream timestamp.
///
/// Rows are append-only: the pair (`neighborhood`, `scraped_at`) is unique
/// and re-ingesting the same snapshot is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Stable neighborhood identifier, e.g. `noe_valley`.
    pub neighborhood: String,
    pub temp_f: Option<f64>,
    pub humidity: Option<f64>,
    pub sensor_count: i64,
    /// True if the upstream source applied outlier correction. Never
    /// re-derived locally.
    pub outlier_corrected: bool,
    /// Upstream snapshot timestamp — the logical observation time, not the
    /// local insertion time.
    pub scraped_at: String,
}

/// One audit record per ingestion attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeLogEntry {
    pub id: i64,
    pub scraped_at: String,
    pub valid_count: i64,
    /// Comma-joined neighborhood keys rejected by the filter. Empty string
    /// when nothing was skipped.
    pub skipped_neighborhoods: String,
    /// Ingestion wall-clock time in UTC.
    pub created_at: String,
    /// The same instant formatted in America/Los_Angeles civil time.
    pub created_at_pacific: Option<String>,
}
