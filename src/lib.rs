/// Exam relay - forwards proctored exam submissions to a Telegram chat.
///
/// The crate implements a single API Lambda: it accepts a POSTed submission
/// (student, timing, anti-cheating counters, answers), renders an HTML-mode
/// report and sends it once through the Telegram Bot API `sendMessage` call.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (`lambda_runtime`) behind an API Gateway / Function URL proxy
/// - reqwest for the Telegram Bot API call
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use exam_relay::api::SubmissionHandler;
/// use exam_relay::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() {
///     exam_relay::setup_logging();
///
///     let config = AppConfig {
///         telegram_bot_token: Some("123456:dummy".to_string()),
///         telegram_chat_id: Some("-1001234567890".to_string()),
///         telegram_api_base: None,
///     };
///     let handler = SubmissionHandler::from_config(config);
///
///     let event = serde_json::json!({ "httpMethod": "GET" });
///     let response = handler.handle(&event).await;
///     assert_eq!(response["statusCode"], 405);
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod telegram;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at cold start.
///
/// # Example
///
/// ```
/// exam_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
