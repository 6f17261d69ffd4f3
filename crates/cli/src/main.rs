use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sf_weather_core::DB_PATH_ENV;
use sf_weather_http::{create_router, AppState};
use sf_weather_ingest::{ScrapeError, ScrapeOutcome, Scraper};
use sf_weather_storage::Storage;

// Exit codes for `scrape`, consumed by cron wrappers. The scheduler can
// tell "upstream had nothing usable" apart from a hard failure.
const EXIT_NO_DATA: u8 = 1;
const EXIT_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "sf-weather")]
#[command(about = "SF microclimate weather scraper and dashboard", long_about = None)]
struct Cli {
    /// Dashboard config file (defaults to config.json next to the database).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard and JSON API.
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Run one ingestion cycle against the upstream API.
    Scrape,
    /// Create or migrate the database and print its location.
    InitDb,
}

fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sf-weather")
        .join("sf-weather.db")
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("ERROR: {e}");
        return ExitCode::from(EXIT_FAILURE);
    }

    let cli = Cli::parse();
    let db_path = get_db_path();
    let config_path =
        cli.config.unwrap_or_else(|| db_path.with_file_name("config.json"));

    let storage = match Storage::open(&db_path) {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("ERROR: cannot open database at {}: {e}", db_path.display());
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    match cli.command {
        Commands::Serve { port, host } => match serve(storage, config_path, &host, port).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("ERROR: {e}");
                ExitCode::from(EXIT_FAILURE)
            }
        },
        Commands::Scrape => scrape(&storage).await,
        Commands::InitDb => {
            println!("Database initialized at {}", storage.path().display());
            ExitCode::SUCCESS
        }
    }
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();
    Ok(())
}

async fn serve(storage: Storage, config_path: PathBuf, host: &str, port: u16) -> Result<()> {
    let state = Arc::new(AppState { storage, config_path });
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

async fn scrape(storage: &Storage) -> ExitCode {
    let scraper = match Scraper::new() {
        Ok(scraper) => scraper,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    let result = scraper.run(storage).await;
    match &result {
        Ok(outcome) if outcome.is_empty() => {
            eprintln!("WARNING: No valid readings found");
        }
        Ok(outcome) => {
            println!(
                "Scraped {} neighborhoods, skipped {} ({})",
                outcome.valid,
                outcome.skipped.len(),
                outcome.skipped.join(", ")
            );
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
        }
    }
    ExitCode::from(scrape_exit_code(&result))
}

/// Maps a run's result to the process exit code: 0 success, 1 when the
/// run stored nothing usable, 2 on a hard failure.
fn scrape_exit_code(result: &Result<ScrapeOutcome, ScrapeError>) -> u8 {
    match result {
        Ok(outcome) if outcome.is_empty() => EXIT_NO_DATA,
        Ok(_) => 0,
        Err(_) => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(valid: usize) -> ScrapeOutcome {
        ScrapeOutcome {
            valid,
            skipped: vec!["soma".to_string()],
            scraped_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_scrape_exit_code_success() {
        assert_eq!(scrape_exit_code(&Ok(outcome(3))), 0);
    }

    #[test]
    fn test_scrape_exit_code_no_data_is_warning_not_failure() {
        let code = scrape_exit_code(&Ok(outcome(0)));
        assert_eq!(code, EXIT_NO_DATA);
        assert_ne!(code, 0);
        assert_ne!(code, EXIT_FAILURE);
    }

    #[test]
    fn test_scrape_exit_code_hard_failure() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let code = scrape_exit_code(&Err(ScrapeError::Parse(parse_err)));
        assert_eq!(code, EXIT_FAILURE);
    }
}
