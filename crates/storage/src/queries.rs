//! Read-only query and aggregation layer.

use anyhow::Result;
use rusqlite::params;
use serde::Serialize;
use sf_weather_core::{Reading, ScrapeLogEntry};

use crate::store::Storage;

/// Scrape-log summary: the newest entry plus the all-time run count.
#[derive(Debug, Serialize)]
pub struct ScrapeStatus {
    pub last_scrape: Option<ScrapeLogEntry>,
    pub total_scrapes: i64,
}

/// One calendar-day bucket of city-wide aggregates.
#[derive(Debug, PartialEq, Serialize)]
pub struct DailySummary {
    /// `YYYY-MM-DD`, derived from the date portion of `scraped_at`.
    pub day: String,
    pub avg_temp: Option<f64>,
    pub avg_humidity: Option<f64>,
    pub neighborhood_count: i64,
}

fn reading_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reading> {
    Ok(Reading {
        neighborhood: row.get(0)?,
        temp_f: row.get(1)?,
        humidity: row.get(2)?,
        sensor_count: row.get(3)?,
        outlier_corrected: row.get(4)?,
        scraped_at: row.get(5)?,
    })
}

impl Storage {
    /// The most recent reading per neighborhood, warmest first.
    ///
    /// Computed with a grouped-max self-join; insertion order is never
    /// assumed.
    pub fn latest(&self) -> Result<Vec<Reading>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            r#"SELECT r.neighborhood, r.temp_f, r.humidity, r.sensor_count,
                      r.outlier_corrected, r.scraped_at
               FROM readings r
               INNER JOIN (
                   SELECT neighborhood, MAX(scraped_at) AS max_at
                   FROM readings
                   GROUP BY neighborhood
               ) latest ON r.neighborhood = latest.neighborhood
                        AND r.scraped_at = latest.max_at
               ORDER BY r.temp_f DESC"#,
        )?;
        let rows = stmt.query_map([], reading_from_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Readings for one neighborhood within the trailing `days`-day window,
    /// oldest first.
    pub fn history(&self, neighborhood: &str, days: u32) -> Result<Vec<Reading>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            r#"SELECT neighborhood, temp_f, humidity, sensor_count,
                      outlier_corrected, scraped_at
               FROM readings
               WHERE neighborhood = ?1
                 AND scraped_at >= datetime('now', ?2)
               ORDER BY scraped_at ASC"#,
        )?;
        let window = format!("-{days} days");
        let rows = stmt
            .query_map(params![neighborhood, window], reading_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// The newest scrape_log entry (None on an empty store) and the total
    /// number of runs ever logged.
    pub fn status(&self) -> Result<ScrapeStatus> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            r#"SELECT id, scraped_at, valid_count, skipped_neighborhoods,
                      created_at, created_at_pacific
               FROM scrape_log ORDER BY id DESC LIMIT 1"#,
        )?;
        let last_scrape = stmt
            .query_map([], |row| {
                Ok(ScrapeLogEntry {
                    id: row.get(0)?,
                    scraped_at: row.get(1)?,
                    valid_count: row.get(2)?,
                    skipped_neighborhoods: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    created_at: row.get(4)?,
                    created_at_pacific: row.get(5)?,
                })
            })?
            .next()
            .transpose()?;
        let total_scrapes: i64 =
            conn.query_row("SELECT COUNT(*) FROM scrape_log", [], |row| row.get(0))?;
        Ok(ScrapeStatus { last_scrape, total_scrapes })
    }

    /// City-wide aggregates bucketed by calendar day within the trailing
    /// `days`-day window, oldest day first.
    pub fn city_summary(&self, days: u32) -> Result<Vec<DailySummary>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            r#"SELECT date(scraped_at) AS day,
                      ROUND(AVG(temp_f), 1) AS avg_temp,
                      ROUND(AVG(humidity), 1) AS avg_humidity,
                      COUNT(DISTINCT neighborhood) AS neighborhood_count
               FROM readings
               WHERE scraped_at >= datetime('now', ?1)
               GROUP BY date(scraped_at)
               ORDER BY day ASC"#,
        )?;
        let window = format!("-{days} days");
        let rows = stmt
            .query_map(params![window], |row| {
                Ok(DailySummary {
                    day: row.get(0)?,
                    avg_temp: row.get(1)?,
                    avg_humidity: row.get(2)?,
                    neighborhood_count: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}
