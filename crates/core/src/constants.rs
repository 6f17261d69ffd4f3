//! Shared constants for the scraper and dashboard.

/// Upstream microclimate API endpoint.
pub const API_URL: &str = "https://microclimates.solofounders.com/sf-weather";

/// User-Agent sent on every upstream fetch.
pub const USER_AGENT: &str = "sf-weather-dashboard/1.0 (Rust; cron job)";

/// Upstream fetch timeout in seconds. The only timeout in the system.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Default trailing window for history and city-summary queries.
pub const DEFAULT_HISTORY_DAYS: u32 = 7;

/// Neighborhood used when `/api/history` is called without one.
pub const DEFAULT_NEIGHBORHOOD: &str = "noe_valley";

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "SF_WEATHER_DB";
