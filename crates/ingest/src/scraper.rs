//! Scraper: fetches one snapshot and writes it through the store.

use sf_weather_core::{Reading, Snapshot, API_URL, FETCH_TIMEOUT_SECS, USER_AGENT};
use sf_weather_storage::Storage;

use crate::error::ScrapeError;

/// Result of one completed ingestion run.
///
/// `valid == 0` is an operational warning, not a failure: the scrape_log
/// row has still been written.
#[derive(Debug)]
pub struct ScrapeOutcome {
    /// Neighborhoods stored (after dedup at the store this may overstate
    /// new rows, matching the logged count).
    pub valid: usize,
    /// Neighborhood keys rejected by the filter, sorted by key.
    pub skipped: Vec<String>,
    /// Snapshot timestamp the run processed.
    pub scraped_at: String,
}

impl ScrapeOutcome {
    /// True when the run stored nothing usable.
    pub fn is_empty(&self) -> bool {
        self.valid == 0
    }
}

/// Upstream API client.
pub struct Scraper {
    client: reqwest::Client,
    url: String,
}

impl Scraper {
    /// Builds a client with the fixed fetch timeout and User-Agent.
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_url(API_URL.to_string())
    }

    /// Same as [`Scraper::new`] but against a custom endpoint (tests).
    pub fn with_url(url: String) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, url })
    }

    /// Fetches and parses one snapshot.
    pub async fn fetch(&self) -> Result<Snapshot, ScrapeError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScrapeError::HttpStatus { code: status.as_u16(), body });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(ScrapeError::Parse)
    }

    /// Runs one full cycle against the store: fetch, filter, persist.
    pub async fn run(&self, storage: &Storage) -> Result<ScrapeOutcome, ScrapeError> {
        let snapshot = self.fetch().await?;
        let scraped_at = snapshot.updated.clone();
        let (valid, skipped) = partition_snapshot(snapshot);

        storage.insert_readings(&valid).map_err(ScrapeError::Persist)?;
        storage
            .append_scrape_log(&scraped_at, valid.len(), &skipped)
            .map_err(ScrapeError::Persist)?;

        tracing::info!(
            valid = valid.len(),
            skipped = skipped.len(),
            skipped_list = %skipped.join(", "),
            scraped_at = %scraped_at,
            "scrape complete"
        );

        Ok(ScrapeOutcome { valid: valid.len(), skipped, scraped_at })
    }
}

/// Splits a snapshot into storable readings and the skip list.
///
/// An entry is skipped when it has no working sensors or no temperature;
/// everything else is normalized to a [`Reading`] stamped with the
/// snapshot's `updated` time.
pub fn partition_snapshot(snapshot: Snapshot) -> (Vec<Reading>, Vec<String>) {
    let scraped_at = snapshot.updated;
    let mut valid = Vec::new();
    let mut skipped = Vec::new();

    for (key, obs) in snapshot.neighborhoods {
        if obs.sensor_count == 0 || obs.temp_f.is_none() {
            skipped.push(key);
            continue;
        }
        valid.push(Reading {
            neighborhood: key,
            temp_f: obs.temp_f,
            humidity: obs.humidity,
            sensor_count: obs.sensor_count,
            outlier_corrected: obs.outlier_corrected,
            scraped_at: scraped_at.clone(),
        });
    }

    (valid, skipped)
}
