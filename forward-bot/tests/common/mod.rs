//! Shared helpers for forward-bot integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use chrono::Utc;
use dbot_core::{Chat, Document, Message, MessageType, User};

/// Destination used by tests; any string works since MockBot only records it.
pub const DESTINATION: &str = "-100200";

pub fn user(first_name: &str) -> User {
    User {
        id: 1001,
        username: Some("ada".to_string()),
        first_name: Some(first_name.to_string()),
        last_name: None,
    }
}

pub fn text_message(chat_id: i64, message_id: &str, text: &str) -> Message {
    Message {
        id: message_id.to_string(),
        user: user("Ada"),
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: text.to_string(),
        message_type: MessageType::Text,
        document: None,
        created_at: Utc::now(),
    }
}

pub fn document() -> Document {
    Document {
        file_id: "BQACAgIAAxkBAAIB".to_string(),
        file_unique_id: "AgADBAAD".to_string(),
        file_name: Some("report.pdf".to_string()),
        mime_type: Some("application/pdf".to_string()),
        file_size: Some(2048),
    }
}

pub fn document_message(chat_id: i64, message_id: &str) -> Message {
    let mut message = text_message(chat_id, message_id, "");
    message.message_type = MessageType::Document;
    message.document = Some(document());
    message
}
