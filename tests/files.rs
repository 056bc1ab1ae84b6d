#![forbid(unsafe_code)]
use chantemerle::{io, Config, FallbackPolicy};
use std::fs;
use tempfile::tempdir;

#[test]
fn dataset_with_inverted_booking_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bookings.json");
    fs::write(
        &path,
        r#"[{"id": 7, "name": "Alice", "start": "2025-01-20", "end": "2025-01-10"}]"#,
    )
    .unwrap();

    let err = io::load_bookings_json(&path).unwrap_err();
    assert!(format!("{err:#}").contains("booking 7"));
}

#[test]
fn dataset_with_empty_name_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bookings.json");
    fs::write(
        &path,
        r#"[{"id": 1, "name": "", "start": "2025-01-10", "end": "2025-01-20"}]"#,
    )
    .unwrap();

    let err = io::load_bookings_json(&path).unwrap_err();
    assert!(format!("{err:#}").contains("name cannot be empty"));
}

#[test]
fn missing_dataset_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = io::load_bookings_json(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ api_base_url: ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("parsing config"));
}

#[test]
fn config_with_invalid_values_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    fs::write(&path, r#"{"timeout_secs": 0}"#).unwrap();
    assert!(Config::load(&path).is_err());

    fs::write(&path, r#"{"api_base_url": "ftp://backend"}"#).unwrap();
    assert!(Config::load(&path).is_err());
}

#[test]
fn valid_config_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"api_base_url": "http://localhost:8080", "upcoming_limit": 3, "fallback": "fail"}"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.api_base_url, "http://localhost:8080");
    assert_eq!(config.upcoming_limit, 3);
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.fallback, FallbackPolicy::Fail);
}
