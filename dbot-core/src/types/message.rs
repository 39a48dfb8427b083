//! Inbound message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, document::Document, user::User};

/// What the inbound message carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageType {
    Text,
    Document,
    /// Photos, stickers, service messages and anything else this bot does not act on.
    Other,
}

/// A single inbound message: sender, chat, text content and an optional document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Transport message id (Telegram numeric id as string).
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty for non-text messages. Document captions are not included.
    pub content: String,
    pub message_type: MessageType,
    pub document: Option<Document>,
    pub created_at: DateTime<Utc>,
}
