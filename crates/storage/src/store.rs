//! Store handle and write path.

use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection};
use sf_weather_core::{format_in_zone, Reading, PACIFIC};
use std::path::{Path, PathBuf};

use crate::migrations;

/// Handle to the on-disk database.
///
/// Cheap to clone and share: it holds only the path. Each operation opens
/// its own connection and releases it on return.
#[derive(Debug, Clone)]
pub struct Storage {
    db_path: PathBuf,
}

impl Storage {
    /// Opens (creating if needed) the database at `db_path` and brings the
    /// schema up to date.
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let storage = Self { db_path: db_path.to_path_buf() };
        let conn = storage.connection()?;
        migrations::run_migrations(&conn)?;
        Ok(storage)
    }

    /// Opens one short-lived connection with the store's pragmas applied.
    pub(crate) fn connection(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "busy_timeout", 5000i32)?;
        Ok(conn)
    }

    /// Path the store was opened at.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Inserts readings, silently dropping rows whose
    /// (neighborhood, scraped_at) pair already exists. Returns the number
    /// of rows actually written.
    pub fn insert_readings(&self, readings: &[Reading]) -> Result<usize> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(
            r#"INSERT OR IGNORE INTO readings
               (neighborhood, temp_f, humidity, sensor_count, outlier_corrected, scraped_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
        )?;
        let mut inserted = 0usize;
        for reading in readings {
            inserted += stmt.execute(params![
                reading.neighborhood,
                reading.temp_f,
                reading.humidity,
                reading.sensor_count,
                reading.outlier_corrected,
                reading.scraped_at,
            ])?;
        }
        Ok(inserted)
    }

    /// Appends one scrape_log row summarizing an ingestion run.
    ///
    /// The UTC stamp comes from the schema default; the Pacific stamp is
    /// formatted here so it never depends on the host zone.
    pub fn append_scrape_log(
        &self,
        scraped_at: &str,
        valid_count: usize,
        skipped: &[String],
    ) -> Result<()> {
        let conn = self.connection()?;
        let now_pacific = format_in_zone(Utc::now(), PACIFIC);
        conn.execute(
            r#"INSERT INTO scrape_log
               (scraped_at, valid_count, skipped_neighborhoods, created_at_pacific)
               VALUES (?1, ?2, ?3, ?4)"#,
            params![scraped_at, valid_count as i64, skipped.join(","), now_pacific],
        )?;
        Ok(())
    }
}
