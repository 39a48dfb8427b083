//! Document forwarding: re-sends every received document to the destination chat and tells the sender how it went.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::failure_text;

/// Caption attached to every forwarded document.
pub const DOCUMENT_CAPTION: &str = "image caption";
/// Reply to the sender after a successful forward.
pub const DOCUMENT_FORWARDED_TEXT: &str = "File forwarded successfully!";

/// Sends the message's document to `destination` with [`DOCUMENT_CAPTION`].
///
/// A failed send is never returned as an error: the sender gets a diagnostic reply instead and the
/// bot keeps running. Only a failure of that reply itself propagates. No retries.
pub struct ForwardDocumentHandler {
    bot: Arc<dyn Bot>,
    destination: String,
}

impl ForwardDocumentHandler {
    pub fn new(bot: Arc<dyn Bot>, destination: impl Into<String>) -> Self {
        Self {
            bot,
            destination: destination.into(),
        }
    }
}

#[async_trait]
impl Handler for ForwardDocumentHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let document = message
            .document
            .as_ref()
            .ok_or(HandlerError::MissingDocument)?;

        let reply = match self
            .bot
            .send_document(&self.destination, document, DOCUMENT_CAPTION)
            .await
        {
            Ok(()) => {
                info!(
                    destination = %self.destination,
                    file_name = ?document.file_name,
                    "Document forwarded"
                );
                DOCUMENT_FORWARDED_TEXT.to_string()
            }
            Err(e) => {
                error!(
                    error = %e,
                    destination = %self.destination,
                    "Document forward failed"
                );
                failure_text("file", &e, message)
            }
        };

        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
