use exam_relay::core::config::{AppConfig, DEFAULT_TELEGRAM_API_BASE};
use exam_relay::errors::RelayError;

#[test]
fn test_credentials_present() {
    let config = AppConfig {
        telegram_bot_token: Some("t".to_string()),
        telegram_chat_id: Some("c".to_string()),
        telegram_api_base: None,
    };
    let creds = config.credentials().unwrap();
    assert_eq!(creds.bot_token, "t");
    assert_eq!(creds.chat_id, "c");
    assert_eq!(config.api_base(), DEFAULT_TELEGRAM_API_BASE);
}

#[test]
fn test_missing_token_is_reported_first() {
    let config = AppConfig::default();
    assert!(matches!(
        config.credentials(),
        Err(RelayError::ConfigurationMissing("TELEGRAM_BOT_TOKEN"))
    ));
}

#[test]
fn test_empty_chat_id_counts_as_missing() {
    let config = AppConfig {
        telegram_bot_token: Some("t".to_string()),
        telegram_chat_id: Some(String::new()),
        telegram_api_base: Some(String::new()),
    };
    assert!(matches!(
        config.credentials(),
        Err(RelayError::ConfigurationMissing("TELEGRAM_CHAT_ID"))
    ));
    assert_eq!(config.api_base(), DEFAULT_TELEGRAM_API_BASE);
}

#[test]
fn test_api_base_override() {
    let config = AppConfig {
        telegram_api_base: Some("http://localhost:8081".to_string()),
        ..AppConfig::default()
    };
    assert_eq!(config.api_base(), "http://localhost:8081");
}
