//! Adapters from Telegram (teloxide) types to dbot_core types.

use dbot_core::{Chat, Document, Message, MessageType, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let document = self.document();
        let message_type = if document.is_some() {
            MessageType::Document
        } else if self.0.text().is_some() {
            MessageType::Text
        } else {
            MessageType::Other
        };

        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: self.chat_type().to_string(),
            },
            content: self.0.text().unwrap_or("").to_string(),
            message_type,
            document,
            created_at: self.0.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Reference to the attached document, if any.
    fn document(&self) -> Option<Document> {
        self.0.document().map(|d| Document {
            file_id: d.file.id.0.clone(),
            file_unique_id: d.file.unique_id.0.clone(),
            file_name: d.file_name.clone(),
            mime_type: d.mime_type.as_ref().map(|m| m.to_string()),
            file_size: Some(u64::from(d.file.size)),
        })
    }

    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_group() {
            "group"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }
}
