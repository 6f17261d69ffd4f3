//! SQLite storage for sf-weather.
//!
//! The store is a thin handle over a database path: every operation opens
//! its own short-lived connection, so concurrent dashboard readers are
//! never blocked behind the scraper (WAL journal mode).

mod migrations;
mod queries;
mod store;

pub use queries::{DailySummary, ScrapeStatus};
pub use store::Storage;
