//! Migration v1: Initial schema

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS readings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    neighborhood TEXT NOT NULL,
    temp_f REAL,
    humidity REAL,
    sensor_count INTEGER,
    outlier_corrected INTEGER DEFAULT 0,
    scraped_at TEXT NOT NULL,
    UNIQUE(neighborhood, scraped_at)
);

CREATE TABLE IF NOT EXISTS scrape_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    scraped_at TEXT NOT NULL,
    valid_count INTEGER NOT NULL,
    skipped_neighborhoods TEXT,
    created_at TEXT DEFAULT (datetime('now')),
    created_at_pacific TEXT
);

CREATE INDEX IF NOT EXISTS idx_readings_neighborhood ON readings(neighborhood);
CREATE INDEX IF NOT EXISTS idx_readings_scraped_at ON readings(scraped_at);
";
