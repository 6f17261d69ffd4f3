//! One ingestion cycle: fetch, parse, filter, persist, report.
//!
//! No retries happen here; an external scheduler (cron) drives the next
//! attempt.

mod error;
mod scraper;
mod tests;

pub use error::ScrapeError;
pub use scraper::{partition_snapshot, ScrapeOutcome, Scraper};
