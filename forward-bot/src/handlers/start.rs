//! `/start`: greets the sender by name.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerError, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

/// Replies `Hi <mention>!` as HTML with selective force-reply markup.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    /// Greeting for `message`'s sender. Fails when the message has no sender (e.g. channel posts).
    pub fn greeting(message: &Message) -> Result<String> {
        if message.user.first_name.is_none() {
            return Err(HandlerError::MissingUser.into());
        }
        Ok(format!("Hi {}!", message.user.mention_html()))
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = Self::greeting(message)?;
        self.bot.reply_html_selective(message, &text).await?;
        info!(user_id = message.user.id, "Greeting sent");
        Ok(HandlerResponse::Reply(text))
    }
}
