use fieldwork::config::{Config, ConfigError};

/// Config::default() produces the documented values.
#[test]
fn default_values() {
    let config = Config::default();

    assert_eq!(
        config.query.endpoint,
        "https://api.github.com/repos/tannerlinsley/react-query"
    );
    assert_eq!(config.query.cache_key, "repo-data");
    assert_eq!(config.query.timeout_seconds, 30);
    assert_eq!(config.query.connect_timeout_seconds, 5);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("fieldwork/config.toml"));
}

#[test]
fn default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

/// Valid TOML parses; omitted keys fall back per-key.
#[test]
fn parse_valid_toml() {
    let toml_content = r#"
[query]
endpoint = "https://example.com/repo.json"
timeout_seconds = 60

[ui]
tick_rate_ms = 100
"#;

    let config: Config = toml::from_str(toml_content).expect("should parse valid TOML");

    assert_eq!(config.query.endpoint, "https://example.com/repo.json");
    assert_eq!(config.query.timeout_seconds, 60);
    assert_eq!(config.query.cache_key, "repo-data", "omitted key defaults");
    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn parse_invalid_toml() {
    let invalid_toml = "this is not valid toml [[[";
    let result: Result<Config, _> = toml::from_str(invalid_toml);
    assert!(result.is_err());
}

#[test]
fn validation_rejects_non_http_endpoint() {
    let mut config = Config::default();
    config.query.endpoint = "ftp://example.com".to_string();

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("http"), "got: {message}");
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}

#[test]
fn validation_rejects_empty_cache_key() {
    let mut config = Config::default();
    config.query.cache_key = String::new();

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("cache key"), "got: {message}");
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}

#[test]
fn validation_rejects_zero_timeouts() {
    let mut config = Config::default();
    config.query.timeout_seconds = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn config_roundtrip() {
    let original = Config::default();
    let serialized = toml::to_string(&original).expect("should serialize");
    let deserialized: Config = toml::from_str(&serialized).expect("should deserialize");

    assert_eq!(original.query.endpoint, deserialized.query.endpoint);
    assert_eq!(original.query.cache_key, deserialized.query.cache_key);
    assert_eq!(original.ui.tick_rate_ms, deserialized.ui.tick_rate_ms);
}

/// Real user flow: write TOML → load_from → validate.
#[test]
fn load_from_reads_and_validates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[query]
endpoint = "https://example.com/repo.json"
cache_key = "example"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).expect("should load");
    assert_eq!(config.query.endpoint, "https://example.com/repo.json");
    assert_eq!(config.query.cache_key, "example");
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let config = Config::load_from(&path).expect("missing file is not an error");
    assert_eq!(config.query.cache_key, "repo-data");
}

#[test]
fn load_from_rejects_invalid_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[query]
endpoint = "not a url"
"#,
    )
    .unwrap();

    let result = Config::load_from(&path);
    assert!(result.is_err(), "should reject non-http endpoint");
    let err = result.unwrap_err().to_string();
    assert!(err.contains("http"), "got: {err}");
}
