//! Telegram Bot API client
//!
//! Sends a single `sendMessage` call per submission. No retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::error;

use crate::core::config::DEFAULT_TELEGRAM_API_BASE;
use crate::errors::RelayError;

pub const PARSE_MODE_HTML: &str = "HTML";

/// JSON body of a `sendMessage` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: &'static str,
}

impl SendMessageRequest {
    #[must_use]
    pub fn html(chat_id: &str, text: String) -> Self {
        Self {
            chat_id: chat_id.to_string(),
            text,
            parse_mode: PARSE_MODE_HTML,
        }
    }
}

/// Outbound transport for formatted reports.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// # Errors
    ///
    /// Returns [`RelayError::DeliveryFailure`] on transport errors or a
    /// non-success HTTP status.
    async fn send_message(
        &self,
        bot_token: &str,
        request: &SendMessageRequest,
    ) -> Result<(), RelayError>;
}

/// reqwest-backed [`MessageSender`] talking to the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    api_base: String,
}

impl TelegramClient {
    #[must_use]
    pub fn new(api_base: &str) -> Self {
        Self::with_http_client(Client::new(), api_base)
    }

    #[must_use]
    pub fn with_http_client(http: Client, api_base: &str) -> Self {
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn send_message_url(&self, bot_token: &str) -> String {
        format!("{}/bot{bot_token}/sendMessage", self.api_base)
    }
}

impl Default for TelegramClient {
    fn default() -> Self {
        Self::new(DEFAULT_TELEGRAM_API_BASE)
    }
}

#[async_trait]
impl MessageSender for TelegramClient {
    async fn send_message(
        &self,
        bot_token: &str,
        request: &SendMessageRequest,
    ) -> Result<(), RelayError> {
        let resp = self
            .http
            .post(self.send_message_url(bot_token))
            .json(request)
            .send()
            .await?;

        if !resp.status().is_success() {
            error!(status = %resp.status(), "Telegram sendMessage returned non-success status");
            return Err(RelayError::DeliveryFailure(format!(
                "sendMessage returned {}",
                resp.status()
            )));
        }

        Ok(())
    }
}
