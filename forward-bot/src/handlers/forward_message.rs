//! Plain text forwarding. Registered only when FORWARD_TEXT_MESSAGES (or `--forward-text`) is on.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::failure_text;

/// Reply to the sender after a successful forward.
pub const MESSAGE_FORWARDED_TEXT: &str = "Message forwarded successfully!";

/// Forwards the message itself (keeping the "forwarded from" marker) to `destination`,
/// then replies with success or a diagnostic, like [`super::ForwardDocumentHandler`].
pub struct ForwardMessageHandler {
    bot: Arc<dyn Bot>,
    destination: String,
}

impl ForwardMessageHandler {
    pub fn new(bot: Arc<dyn Bot>, destination: impl Into<String>) -> Self {
        Self {
            bot,
            destination: destination.into(),
        }
    }
}

#[async_trait]
impl Handler for ForwardMessageHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = match self.bot.forward_message(&self.destination, message).await {
            Ok(()) => {
                info!(destination = %self.destination, "Message forwarded");
                MESSAGE_FORWARDED_TEXT.to_string()
            }
            Err(e) => {
                error!(error = %e, destination = %self.destination, "Message forward failed");
                failure_text("message", &e, message)
            }
        };

        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
