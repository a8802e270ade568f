use thiserror::Error;

/// Public message for failures after the preconditions have passed.
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send data to Telegram";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Telegram credentials not configured: {0}")]
    ConfigurationMissing(&'static str),

    #[error("Malformed submission: {0}")]
    MalformedSubmission(String),

    #[error("Failed to send message to Telegram: {0}")]
    DeliveryFailure(String),
}

impl RelayError {
    /// HTTP status reported to the caller for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::MethodNotAllowed(_) => 405,
            RelayError::ConfigurationMissing(_)
            | RelayError::MalformedSubmission(_)
            | RelayError::DeliveryFailure(_) => 500,
        }
    }

    /// Fixed message returned to the caller. Never includes the cause.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::MethodNotAllowed(_) => "Method not allowed",
            RelayError::ConfigurationMissing(_) => "Server configuration error",
            RelayError::MalformedSubmission(_) | RelayError::DeliveryFailure(_) => {
                DELIVERY_FAILED_MESSAGE
            }
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::MalformedSubmission(error.to_string())
    }
}

impl From<base64::DecodeError> for RelayError {
    fn from(error: base64::DecodeError) -> Self {
        RelayError::MalformedSubmission(format!("invalid base64 body: {error}"))
    }
}

// The request URL embeds the bot token, so it is stripped before formatting.
impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::DeliveryFailure(error.without_url().to_string())
    }
}
