//! Dispatch registration: which handler serves which route.

use dbot_core::{Bot, Route};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::info;

use crate::config::BotConfig;
use crate::handlers::{
    ForwardDocumentHandler, ForwardMessageHandler, HelpHandler, LoggingHandler, StartHandler,
};

/// Builds the chain: logging middleware, then `Start`, `Help`, `Document` in that order, and
/// `PlainText` only when `config.forward_text_messages` is set.
pub fn build_handler_chain(config: &BotConfig, bot: Arc<dyn Bot>) -> HandlerChain {
    let mut chain = HandlerChain::new()
        .add_middleware(Arc::new(LoggingHandler))
        .add_route(Route::Start, Arc::new(StartHandler::new(bot.clone())))
        .add_route(Route::Help, Arc::new(HelpHandler::new(bot.clone())))
        .add_route(
            Route::Document,
            Arc::new(ForwardDocumentHandler::new(
                bot.clone(),
                config.destination_chat_id.clone(),
            )),
        );

    if config.forward_text_messages {
        chain = chain.add_route(
            Route::PlainText,
            Arc::new(ForwardMessageHandler::new(
                bot,
                config.destination_chat_id.clone(),
            )),
        );
    }

    info!(
        routes = ?chain.routes(),
        destination = %config.destination_chat_id,
        "Handler chain built"
    );
    chain
}
