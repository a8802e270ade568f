use std::env;

use crate::errors::RelayError;

pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Process-wide configuration, loaded once at cold start.
///
/// Both Telegram secrets are optional here so that a missing secret surfaces
/// per request as a configuration error instead of failing the whole Lambda.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub telegram_api_base: Option<String>,
}

/// Validated Telegram credentials borrowed from an [`AppConfig`].
#[derive(Debug, Clone, Copy)]
pub struct TelegramCredentials<'a> {
    pub bot_token: &'a str,
    pub chat_id: &'a str,
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            telegram_bot_token: non_empty_var("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: non_empty_var("TELEGRAM_CHAT_ID"),
            telegram_api_base: non_empty_var("TELEGRAM_API_BASE"),
        }
    }

    /// Returns both secrets, or names the first one that is absent or empty.
    pub fn credentials(&self) -> Result<TelegramCredentials<'_>, RelayError> {
        let bot_token = present(self.telegram_bot_token.as_deref())
            .ok_or(RelayError::ConfigurationMissing("TELEGRAM_BOT_TOKEN"))?;
        let chat_id = present(self.telegram_chat_id.as_deref())
            .ok_or(RelayError::ConfigurationMissing("TELEGRAM_CHAT_ID"))?;
        Ok(TelegramCredentials { bot_token, chat_id })
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        present(self.telegram_api_base.as_deref()).unwrap_or(DEFAULT_TELEGRAM_API_BASE)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
