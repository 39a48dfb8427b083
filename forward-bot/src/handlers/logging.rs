//! Middleware that logs each dispatched message and its outcome.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logs each message in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            chat_id = message.chat.id,
            message_type = ?message.message_type,
            "Dispatching message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}
