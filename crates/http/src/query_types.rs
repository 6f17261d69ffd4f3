//! Request/query types (Deserialize)

use serde::Deserialize;
use sf_weather_core::{DEFAULT_HISTORY_DAYS, DEFAULT_NEIGHBORHOOD};

const fn default_days() -> u32 {
    DEFAULT_HISTORY_DAYS
}

fn default_neighborhood() -> String {
    DEFAULT_NEIGHBORHOOD.to_owned()
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_neighborhood")]
    pub neighborhood: String,
    #[serde(default = "default_days")]
    pub days: u32,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    #[serde(default = "default_days")]
    pub days: u32,
}
