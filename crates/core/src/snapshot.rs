//! Upstream wire format.
//!
//! One snapshot is one API response: a top-level timestamp plus a map from
//! neighborhood identifier to that neighborhood's current observation.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Full upstream response body.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    /// Logical observation time for every neighborhood in this snapshot.
    pub updated: String,
    pub neighborhoods: BTreeMap<String, NeighborhoodObs>,
}

/// Per-neighborhood observation fields as sent by the upstream API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeighborhoodObs {
    pub temp_f: Option<f64>,
    pub humidity: Option<f64>,
    #[serde(default)]
    pub sensor_count: i64,
    /// The upstream marks corrected readings by the mere presence of this
    /// key; its value carries no meaning.
    #[serde(default, deserialize_with = "key_presence")]
    pub outlier_corrected: bool,
}

/// Deserializes to `true` whenever the key is present, whatever its value.
fn key_presence<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let _ = serde::de::IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}
