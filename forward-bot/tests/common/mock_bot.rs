//! Mock implementation of [`dbot_core::Bot`] for integration tests.
//!
//! Records every outbound call so tests can assert on what was sent and where, without hitting Telegram.
//! Document sends and forwards can be scripted to fail with a given description.

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, Document, Message, Result};
use std::sync::{Arc, Mutex};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SendMessage {
        chat_id: i64,
        text: String,
    },
    Reply {
        chat_id: i64,
        text: String,
    },
    ReplyHtmlSelective {
        chat_id: i64,
        html: String,
    },
    SendDocument {
        destination: String,
        file_id: String,
        caption: String,
    },
    ForwardMessage {
        destination: String,
        from_chat_id: i64,
        message_id: String,
    },
}

/// Mock Bot that records calls; `send_document` / `forward_message` fail when a description is scripted.
#[derive(Default)]
pub struct MockBot {
    calls: Mutex<Vec<Call>>,
    send_document_error: Option<String>,
    forward_error: Option<String>,
}

impl MockBot {
    /// Every call succeeds.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// `send_document` fails with `DbotError::Api(description)`.
    pub fn failing_send_document(description: &str) -> Arc<Self> {
        Arc::new(Self {
            send_document_error: Some(description.to_string()),
            ..Self::default()
        })
    }

    /// `forward_message` fails with `DbotError::Api(description)`.
    pub fn failing_forward(description: &str) -> Arc<Self> {
        Arc::new(Self {
            forward_error: Some(description.to_string()),
            ..Self::default()
        })
    }

    /// Snapshot of the calls so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts of all plain replies, in order.
    pub fn replies(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Reply { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Call::SendMessage {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(Call::Reply {
            chat_id: message.chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_html_selective(&self, message: &Message, html: &str) -> Result<()> {
        self.record(Call::ReplyHtmlSelective {
            chat_id: message.chat.id,
            html: html.to_string(),
        });
        Ok(())
    }

    async fn send_document(
        &self,
        destination: &str,
        document: &Document,
        caption: &str,
    ) -> Result<()> {
        self.record(Call::SendDocument {
            destination: destination.to_string(),
            file_id: document.file_id.clone(),
            caption: caption.to_string(),
        });
        match &self.send_document_error {
            Some(description) => Err(DbotError::Api(description.clone())),
            None => Ok(()),
        }
    }

    async fn forward_message(&self, destination: &str, message: &Message) -> Result<()> {
        self.record(Call::ForwardMessage {
            destination: destination.to_string(),
            from_chat_id: message.chat.id,
            message_id: message.id.clone(),
        });
        match &self.forward_error {
            Some(description) => Err(DbotError::Api(description.clone())),
            None => Ok(()),
        }
    }
}
