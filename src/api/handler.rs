//! API Lambda handler for exam submissions.
//!
//! This module handles:
//! - Method and configuration preconditions
//! - Parsing and formatting the submission
//! - Relaying the report to Telegram and mapping the outcome to a response

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::core::config::{AppConfig, TelegramCredentials};
use crate::core::models::Submission;
use crate::errors::RelayError;
use crate::telegram::{MessageSender, SendMessageRequest, TelegramClient, format_submission_message};

/// Request handler holding the process-wide configuration and transport.
pub struct SubmissionHandler<S = TelegramClient> {
    config: AppConfig,
    sender: S,
}

impl SubmissionHandler<TelegramClient> {
    /// Builds a handler with a reqwest-backed Telegram client.
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        let sender = TelegramClient::new(config.api_base());
        Self::new(config, sender)
    }
}

impl<S: MessageSender> SubmissionHandler<S> {
    #[must_use]
    pub fn new(config: AppConfig, sender: S) -> Self {
        Self { config, sender }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Handles one proxy event and returns the proxy response.
    ///
    /// Never fails: every error is logged and mapped to a generic response.
    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(request_id = %uuid::Uuid::new_v4())
    )]
    pub async fn handle(&self, payload: &Value) -> Value {
        let method = parsing::get_http_method(payload).unwrap_or_default();
        if !method.eq_ignore_ascii_case("POST") {
            info!(method = %method, "Rejecting non-POST request");
            return helpers::error_to_response(&RelayError::MethodNotAllowed(method.to_string()));
        }

        let credentials = match self.config.credentials() {
            Ok(c) => c,
            Err(e) => {
                error!("{}", e);
                return helpers::error_to_response(&e);
            }
        };

        match self.relay(credentials, payload).await {
            Ok(()) => {
                info!("Submission relayed to Telegram");
                helpers::ok_delivered()
            }
            Err(e) => {
                error!("Error sending to Telegram: {}", e);
                helpers::error_to_response(&e)
            }
        }
    }

    async fn relay(
        &self,
        credentials: TelegramCredentials<'_>,
        payload: &Value,
    ) -> Result<(), RelayError> {
        let body = parsing::extract_body(payload)?;
        let submission: Submission = serde_json::from_str(&body)?;

        let text = format_submission_message(&submission);
        info!(message_len = text.len(), "Formatted submission report");

        let request = SendMessageRequest::html(credentials.chat_id, text);
        self.sender
            .send_message(credentials.bot_token, &request)
            .await
    }
}

/// Lambda entrypoint adapter around [`SubmissionHandler::handle`].
///
/// # Errors
///
/// Never returns an error; failures are reported in the response payload.
pub async fn function_handler<S: MessageSender>(
    handler: &SubmissionHandler<S>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(handler.handle(&event.payload).await)
}
