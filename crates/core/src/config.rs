//! Dashboard configuration file.
//!
//! A small JSON file read on every `/api/config` request. A missing or
//! corrupt file is not an error condition: the dashboard degrades to no
//! favorite neighborhood.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// User-editable dashboard settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub favorite_neighborhood: String,
}

impl DashboardConfig {
    /// Loads the config file, returning `None` when it is missing or
    /// unparseable.
    pub fn load(path: &Path) -> Option<Self> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(path = %path.display(), "config file not readable: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring malformed config file: {e}");
                None
            }
        }
    }
}
