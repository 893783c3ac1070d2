/*!
 * Tests for app configuration
 */

use crosspost_rules::app_config::{Config, LogLevel};
use crosspost_rules::validation::ValidationConfig;

/// Test default configuration values
#[test]
fn test_defaultConfig_shouldHaveDashboardDefaults() {
    let config = Config::default();

    assert_eq!(config.default_platforms, vec!["telegram", "vk", "instagram"]);
    assert!(config.validation.enabled);
    assert!(!config.validation.strict_platform_ids);
    assert!(!config.validation.enforce_hashtag_length);
    assert_eq!(config.pricing.usd_to_rub, 92.0);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test config validation failures
#[test]
fn test_validate_withInvalidValues_shouldFail() {
    let mut config = Config::default();
    config.default_platforms.push("friendster".to_string());
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.pricing.usd_to_rub = -1.0;
    assert!(config.validate().is_err());
}

/// Test JSON round trip through a config file
#[test]
fn test_config_shouldRoundTripThroughFile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.validation.strict_platform_ids = true;
    config.pricing.usd_to_rub = 95.5;

    let json = serde_json::to_string_pretty(&config).unwrap();
    std::fs::write(&path, json).unwrap();

    let loaded: Config = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert!(loaded.validation.strict_platform_ids);
    assert_eq!(loaded.pricing.usd_to_rub, 95.5);
    assert_eq!(loaded.default_platforms, config.default_platforms);
}

/// Test that missing fields fall back to defaults
#[test]
fn test_deserialize_withMissingFields_shouldUseDefaults() {
    let config: Config = serde_json::from_str(r#"{"log_level": "debug"}"#).unwrap();

    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.validation.caption_validation);
    assert_eq!(config.pricing.smm_hourly_rate, 15.0);
}

/// Test conversion into the validation service config
#[test]
fn test_validationSettings_shouldConvertToServiceConfig() {
    let mut config = Config::default();
    config.validation.link_validation = false;
    config.validation.enforce_hashtag_length = true;

    let service_config: ValidationConfig = config.validation.into();

    assert!(!service_config.link_validation);
    assert!(service_config.enforce_hashtag_length);
    assert!(service_config.caption_validation);
}
