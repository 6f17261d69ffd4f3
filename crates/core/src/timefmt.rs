//! Civil-time formatting for scrape log stamps.
//!
//! The log records ingestion time both in UTC and in a fixed named zone,
//! independent of whatever zone the host happens to run in.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// The dashboard's civil zone.
pub const PACIFIC: Tz = chrono_tz::America::Los_Angeles;

/// Formats an instant as wall-clock time in the given zone,
/// e.g. `2024-01-01 04:15:00 PM`.
pub fn format_in_zone(instant: DateTime<Utc>, zone: Tz) -> String {
    instant.with_timezone(&zone).format("%Y-%m-%d %I:%M:%S %p").to_string()
}
