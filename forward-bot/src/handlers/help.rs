//! `/help`.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;

pub const HELP_TEXT: &str = "Help!";

pub struct HelpHandler {
    bot: Arc<dyn Bot>,
}

impl HelpHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        self.bot.reply_to(message, HELP_TEXT).await?;
        Ok(HandlerResponse::Reply(HELP_TEXT.to_string()))
    }
}
