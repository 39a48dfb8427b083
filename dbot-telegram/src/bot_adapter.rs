//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code talks to Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{parse_message_id, Bot as CoreBot, Chat, DbotError, Document, Message, Result};
use teloxide::{
    payloads::{SendDocumentSetters, SendMessageSetters},
    prelude::*,
    types::{ChatId, FileId, ForceReply, InputFile, MessageId, ParseMode, Recipient},
    RequestError,
};
use tracing::{debug, instrument};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Parses a configured destination: a numeric chat id, otherwise a channel username (`@name`).
pub fn parse_recipient(destination: &str) -> Recipient {
    let destination = destination.trim();
    match destination.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(destination.to_string()),
    }
}

/// Telegram's own description for API errors, the transport error text otherwise.
fn describe(err: RequestError) -> DbotError {
    match err {
        RequestError::Api(api) => DbotError::Api(api.to_string()),
        other => DbotError::Api(other.to_string()),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(describe)?;
        Ok(())
    }

    async fn reply_html_selective(&self, message: &Message, html: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(message.chat.id), html.to_string())
            .parse_mode(ParseMode::Html)
            .reply_markup(ForceReply::new().selective())
            .await
            .map_err(describe)?;
        Ok(())
    }

    #[instrument(skip(self, document), fields(file_id = %document.file_id))]
    async fn send_document(
        &self,
        destination: &str,
        document: &Document,
        caption: &str,
    ) -> Result<()> {
        let input = InputFile::file_id(FileId(document.file_id.clone()));
        self.bot
            .send_document(parse_recipient(destination), input)
            .caption(caption)
            .await
            .map_err(describe)?;
        debug!(destination = %destination, "document sent");
        Ok(())
    }

    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn forward_message(&self, destination: &str, message: &Message) -> Result<()> {
        let message_id = parse_message_id(&message.id)?;
        self.bot
            .forward_message(
                parse_recipient(destination),
                ChatId(message.chat.id),
                MessageId(message_id),
            )
            .await
            .map_err(describe)?;
        debug!(destination = %destination, "message forwarded");
        Ok(())
    }
}
