//! All Telegram-specific functionality

pub mod client;
pub mod escape;
pub mod message_formatter;

// Re-export main types for convenience
pub use client::{MessageSender, SendMessageRequest, TelegramClient};
pub use escape::escape_html;
pub use message_formatter::format_submission_message;
