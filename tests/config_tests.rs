use std::path::PathBuf;
use tender_food::config::{AppConfig, Cli, ConfigError};

#[test]
fn test_default_config() {
    let config = AppConfig::default();

    assert_eq!(config.sellers, vec!["RM Sederhana", "Warteg Kharisma", "RM Pagi Sore"]);
    assert_eq!(config.quick_tags, vec!["Something Sweet", "A Lot", "Simple", "Last Longer"]);
    assert_eq!(AppConfig::load(&Cli { config: None }).unwrap(), config);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = AppConfig::from_json(r#"{"sellers": ["Warung Bu Tini", "Bakso Pak Kumis"]}"#).unwrap();

    assert_eq!(config.sellers, vec!["Warung Bu Tini", "Bakso Pak Kumis"]);
    assert_eq!(config.quick_tags, AppConfig::default().quick_tags);

    let config = AppConfig::from_json(r#"{"quickTags": ["Spicy"]}"#).unwrap();
    assert_eq!(config.quick_tags, vec!["Spicy"]);
    assert_eq!(config.sellers, AppConfig::default().sellers);
}

#[test]
fn test_invalid_config() {
    assert!(matches!(AppConfig::from_json(r#"{"sellers": []}"#), Err(ConfigError::NoSellers)));
    assert!(matches!(AppConfig::from_json("not json"), Err(ConfigError::Parse(_))));

    let missing = Cli { config: Some(PathBuf::from("/nonexistent/tender.json")) };
    assert!(matches!(AppConfig::load(&missing), Err(ConfigError::Io(_, _))));
}
