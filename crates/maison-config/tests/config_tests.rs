use std::path::PathBuf;

use maison_config::{Config, ConfigError, ConfigManager, Theme};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert!(cfg.catalog_path.is_none());
    assert!(cfg.outbox_dir.is_none());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let mut cfg = Config::default();
    cfg.locale = "fr".to_string();
    cfg.outbox_dir = Some(dir.path().join("outbox"));

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.locale, "fr");
    assert_eq!(loaded.outbox_dir, Some(dir.path().join("outbox")));
    assert!(manager.config_path().ends_with("config/config.json"));
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("absent.json"));
    let loaded = manager.load().expect("load defaults");
    assert_eq!(loaded.currency, Config::default().currency);
}

#[test]
fn corrupt_file_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = ConfigManager::new(path).load().unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
}

#[test]
fn set_value_updates_known_keys() {
    let mut cfg = Config::default();
    cfg.set_value("currency", "chf").unwrap();
    cfg.set_value("theme", "plain").unwrap();
    cfg.set_value("catalog", "/srv/rooms.json").unwrap();
    cfg.set_value("color", "off").unwrap();

    assert_eq!(cfg.currency, "CHF");
    assert_eq!(cfg.theme, Theme::Plain);
    assert_eq!(cfg.catalog_path, Some(PathBuf::from("/srv/rooms.json")));
    assert!(!cfg.ui_color_enabled);

    cfg.set_value("catalog", "none").unwrap();
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn set_value_rejects_unknown_keys_and_bad_values() {
    let mut cfg = Config::default();
    assert!(matches!(
        cfg.set_value("timezone", "UTC"),
        Err(ConfigError::UnknownKey(_))
    ));
    assert!(matches!(
        cfg.set_value("color", "maybe"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(cfg.set_value("locale", "  ").is_err());
}

#[test]
fn unknown_theme_falls_back_to_default() {
    let cfg: Config =
        serde_json::from_str(r#"{"locale":"en","currency":"EUR","theme":"neon"}"#).unwrap();
    assert_eq!(cfg.theme, Theme::Iconic);
    assert!(cfg.ui_color_enabled);
}
