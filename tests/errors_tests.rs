use std::error::Error;
use exam_relay::api::helpers::error_to_response;
use exam_relay::errors::RelayError;

#[test]
fn test_relay_error_implements_error_trait() {
    // Verify RelayError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = RelayError::MalformedSubmission("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_relay_error_display() {
    let error = RelayError::DeliveryFailure("sendMessage returned 403".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send message to Telegram: sendMessage returned 403"
    );

    let error = RelayError::ConfigurationMissing("TELEGRAM_CHAT_ID");
    assert_eq!(
        format!("{error}"),
        "Telegram credentials not configured: TELEGRAM_CHAT_ID"
    );
}

#[test]
fn test_status_and_public_message_mapping() {
    let cases = [
        (RelayError::MethodNotAllowed("GET".into()), 405, "Method not allowed"),
        (
            RelayError::ConfigurationMissing("TELEGRAM_BOT_TOKEN"),
            500,
            "Server configuration error",
        ),
        (
            RelayError::MalformedSubmission("missing field".into()),
            500,
            "Failed to send data to Telegram",
        ),
        (
            RelayError::DeliveryFailure("timeout".into()),
            500,
            "Failed to send data to Telegram",
        ),
    ];

    for (error, status, message) in cases {
        assert_eq!(error.status_code(), status);
        assert_eq!(error.public_message(), message);

        let response = error_to_response(&error);
        assert_eq!(response["statusCode"], status);
        let body: serde_json::Value =
            serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "error": message }));
    }
}

#[test]
fn test_relay_error_from_conversions() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let relay_err: RelayError = err.into();
    assert!(matches!(relay_err, RelayError::MalformedSubmission(_)));

    // Verifies that the From<reqwest::Error> conversion exists
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> RelayError {
        RelayError::from(err)
    }
}
