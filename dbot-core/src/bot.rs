//! Bot abstraction for outbound calls: replies, document sends, forwards.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram's `TelegramBotAdapter` implements it via teloxide and
//! tests substitute a recording mock.

use crate::error::{DbotError, Result};
use crate::types::{Chat, Document, Message};
use async_trait::async_trait;

/// Outbound operations the handlers need. Implementations map to a transport (e.g. Telegram).
///
/// `destination` is the configured target conversation as written in config: a numeric chat id
/// or a channel username such as `@my_channel`.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a plain-text reply into the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Sends an HTML-formatted reply into the originating chat with selective force-reply markup,
    /// so the sender's client ties the answer to the triggering message.
    async fn reply_html_selective(&self, message: &Message, html: &str) -> Result<()>;

    /// Re-sends an already uploaded document to `destination` with the given caption.
    async fn send_document(&self, destination: &str, document: &Document, caption: &str)
        -> Result<()>;

    /// Forwards the message to `destination`, keeping its forwarded-from marker.
    async fn forward_message(&self, destination: &str, message: &Message) -> Result<()>;
}

/// Parses a message id string into an i32. Used when an outbound call needs the numeric id back.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id: {}", s)))
}
