#[cfg(test)]
mod scraper_tests {
    use crate::{partition_snapshot, ScrapeError, Scraper};
    use serde_json::json;
    use sf_weather_core::Snapshot;
    use sf_weather_storage::Storage;
    use tempfile::TempDir;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::open(&temp_dir.path().join("test.db")).unwrap();
        (storage, temp_dir)
    }

    fn sample_body() -> serde_json::Value {
        json!({
            "updated": "2024-01-01T00:00:00Z",
            "neighborhoods": {
                "noe_valley": {"temp_f": 60, "humidity": 70, "sensor_count": 3},
                "soma": {"temp_f": null, "sensor_count": 0}
            }
        })
    }

    async fn mount_snapshot(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/sf-weather"))
            .and(header("user-agent", sf_weather_core::USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[test]
    fn test_partition_filters_and_normalizes() {
        let snapshot: Snapshot = serde_json::from_value(sample_body()).unwrap();
        let (valid, skipped) = partition_snapshot(snapshot);

        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].neighborhood, "noe_valley");
        assert_eq!(valid[0].temp_f, Some(60.0));
        assert_eq!(valid[0].scraped_at, "2024-01-01T00:00:00Z");
        assert_eq!(skipped, vec!["soma".to_string()]);
    }

    #[test]
    fn test_partition_skips_missing_temp_even_with_sensors() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "updated": "2024-01-01T00:00:00Z",
            "neighborhoods": {
                "mission": {"humidity": 80, "sensor_count": 5}
            }
        }))
        .unwrap();
        let (valid, skipped) = partition_snapshot(snapshot);
        assert!(valid.is_empty());
        assert_eq!(skipped, vec!["mission".to_string()]);
    }

    #[test]
    fn test_partition_carries_outlier_flag() {
        let snapshot: Snapshot = serde_json::from_value(json!({
            "updated": "2024-01-01T00:00:00Z",
            "neighborhoods": {
                "richmond": {"temp_f": 52, "sensor_count": 2, "outlier_corrected": false}
            }
        }))
        .unwrap();
        let (valid, _) = partition_snapshot(snapshot);
        // Key presence sets the flag, the value does not matter.
        assert!(valid[0].outlier_corrected);
    }

    #[tokio::test]
    async fn test_run_persists_readings_and_log() {
        let server = MockServer::start().await;
        mount_snapshot(&server, sample_body()).await;
        let (storage, _temp_dir) = create_test_storage();

        let scraper = Scraper::with_url(format!("{}/sf-weather", server.uri())).unwrap();
        let outcome = scraper.run(&storage).await.unwrap();

        assert_eq!(outcome.valid, 1);
        assert_eq!(outcome.skipped, vec!["soma".to_string()]);
        assert!(!outcome.is_empty());

        let latest = storage.latest().unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].neighborhood, "noe_valley");
        assert_eq!(latest[0].temp_f, Some(60.0));

        let status = storage.status().unwrap();
        let last = status.last_scrape.unwrap();
        assert_eq!(last.valid_count, 1);
        assert_eq!(last.skipped_neighborhoods, "soma");
        assert_eq!(status.total_scrapes, 1);
    }

    #[tokio::test]
    async fn test_rerun_same_snapshot_is_idempotent_for_readings() {
        let server = MockServer::start().await;
        mount_snapshot(&server, sample_body()).await;
        let (storage, _temp_dir) = create_test_storage();
        let scraper = Scraper::with_url(format!("{}/sf-weather", server.uri())).unwrap();

        scraper.run(&storage).await.unwrap();
        scraper.run(&storage).await.unwrap();

        // One reading row, but one log row per run.
        assert_eq!(storage.latest().unwrap().len(), 1);
        assert_eq!(storage.status().unwrap().total_scrapes, 2);
    }

    #[tokio::test]
    async fn test_run_with_zero_valid_still_writes_log() {
        let server = MockServer::start().await;
        mount_snapshot(
            &server,
            json!({
                "updated": "2024-01-01T00:00:00Z",
                "neighborhoods": {"soma": {"temp_f": null, "sensor_count": 0}}
            }),
        )
        .await;
        let (storage, _temp_dir) = create_test_storage();
        let scraper = Scraper::with_url(format!("{}/sf-weather", server.uri())).unwrap();

        let outcome = scraper.run(&storage).await.unwrap();
        assert!(outcome.is_empty());

        let last = storage.status().unwrap().last_scrape.unwrap();
        assert_eq!(last.valid_count, 0);
        assert_eq!(last.skipped_neighborhoods, "soma");
    }

    #[tokio::test]
    async fn test_fetch_non_2xx_is_http_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sf-weather"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let scraper = Scraper::with_url(format!("{}/sf-weather", server.uri())).unwrap();
        let err = scraper.fetch().await.unwrap_err();
        match err {
            ScrapeError::HttpStatus { code, body } => {
                assert_eq!(code, 503);
                assert_eq!(body, "down");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sf-weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let scraper = Scraper::with_url(format!("{}/sf-weather", server.uri())).unwrap();
        let err = scraper.fetch().await.unwrap_err();
        assert!(matches!(err, ScrapeError::Parse(_)), "expected Parse, got {err:?}");
    }
}
