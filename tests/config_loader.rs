//! Config loading and the runtime config store.

use std::io::Write;
use std::time::Duration;

use shopfront::config::{Config, ConfigError, ConfigStore};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_full_config() {
    let file = write_config(
        r#"
        base_url = "http://catalog.internal:9000"

        [timeouts]
        connect_seconds = 2
        request_seconds = 10

        [authoring]
        saved_reset_delay_ms = 1500
        "#,
    );

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.base_url, "http://catalog.internal:9000");
    assert_eq!(config.timeouts().request, Duration::from_secs(10));
    assert_eq!(config.saved_reset_delay(), Duration::from_millis(1500));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let file = write_config("base_url = [not toml");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn bad_scheme_fails_validation() {
    let file = write_config(r#"base_url = "catalog.internal""#);
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_request_timeout_fails_validation() {
    let file = write_config(
        r#"
        [timeouts]
        request_seconds = 0
        "#,
    );
    assert!(Config::load_from(file.path()).is_err());
}

#[test]
fn store_reload_replaces_config() {
    let file = write_config(r#"base_url = "http://one.internal""#);
    let store = ConfigStore::new(
        Config::load_from(file.path()).unwrap(),
        file.path().to_path_buf(),
    );
    assert_eq!(store.get().base_url, "http://one.internal");

    std::fs::write(file.path(), r#"base_url = "http://two.internal""#).unwrap();
    store.reload().unwrap();
    assert_eq!(store.get().base_url, "http://two.internal");
}

#[test]
fn store_reload_failure_keeps_old_config() {
    let file = write_config(r#"base_url = "http://one.internal""#);
    let store = ConfigStore::new(
        Config::load_from(file.path()).unwrap(),
        file.path().to_path_buf(),
    );

    std::fs::write(file.path(), "base_url = [broken").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get().base_url, "http://one.internal");
}
