use super::*;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.store_path, None);
    assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
    assert_eq!(config.window_height, DEFAULT_WINDOW_HEIGHT);
    assert_eq!(config.activation_delay_ms, DEFAULT_ACTIVATION_DELAY_MS);
    assert_eq!(config.close_on_focus_loss, DEFAULT_CLOSE_ON_FOCUS_LOSS);
}

#[test]
fn test_default_store_path_is_relative_to_cwd() {
    let config = Config::default();
    assert_eq!(config.store_path(), PathBuf::from(DEFAULT_STORE_FILE));
}

#[test]
fn test_empty_object_uses_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_camel_case_fields() {
    let json = r#"{
        "storePath": "/tmp/my-shortcuts.json",
        "windowWidth": 320,
        "activationDelayMs": 250,
        "closeOnFocusLoss": false
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.store_path(), PathBuf::from("/tmp/my-shortcuts.json"));
    assert_eq!(config.window_width, 320.0);
    assert_eq!(config.window_height, DEFAULT_WINDOW_HEIGHT);
    assert_eq!(config.activation_delay().as_millis(), 250);
    assert!(!config.close_on_focus_loss);
}

#[test]
fn test_store_path_expands_tilde() {
    let config = Config {
        store_path: Some(PathBuf::from("~/launcher/shortcuts.json")),
        ..Config::default()
    };
    let resolved = config.store_path();
    assert!(!resolved.to_string_lossy().starts_with('~'));
    assert!(resolved.ends_with("launcher/shortcuts.json"));
}

#[test]
fn test_window_size_is_clamped() {
    let config = Config {
        window_width: 5.0,
        window_height: 1.0e6,
        ..Config::default()
    };
    assert_eq!(
        config.window_size(),
        (MIN_WINDOW_DIMENSION, MAX_WINDOW_DIMENSION)
    );

    let config = Config {
        window_width: f32::NAN,
        ..Config::default()
    };
    assert_eq!(config.window_size().0, DEFAULT_WINDOW_WIDTH);
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let dir = tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_malformed_file_returns_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(load_config(&path), Config::default());
}

#[test]
fn test_load_valid_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"windowHeight": 480}"#).unwrap();
    let config = load_config(&path);
    assert_eq!(config.window_height, 480.0);
    assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = Config {
        store_path: Some(PathBuf::from("/var/lib/launcher.json")),
        window_width: 240.0,
        window_height: 420.0,
        activation_delay_ms: 500,
        close_on_focus_loss: false,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("activationDelayMs"));
    let deserialized: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, config);
}

#[test]
fn test_default_config_path_is_in_home() {
    let path = default_config_path();
    assert!(path.ends_with(".quick-launch/config.json"));
}
