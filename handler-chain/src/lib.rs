//! # Handler chain
//!
//! Dispatches each message to at most one handler, chosen by its [`Route`]. Middleware wraps every message:
//! `before` runs in order and can stop the chain, `after` runs in reverse order with the final response.

use dbot_core::{Handler, HandlerResponse, Message, Result, Route};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Middleware plus a route table. Cheap to clone; one clone per spawned message task.
#[derive(Clone, Default)]
pub struct HandlerChain {
    middleware: Vec<Arc<dyn Handler>>,
    routes: Vec<(Route, Arc<dyn Handler>)>,
    bot_username: Option<String>,
}

impl HandlerChain {
    /// Creates an empty chain (no middleware, no routes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a middleware (before in order, after in reverse).
    pub fn add_middleware(mut self, middleware: Arc<dyn Handler>) -> Self {
        self.middleware.push(middleware);
        self
    }

    /// Registers the handler for `route`. Routes are checked in registration order; the first registration wins.
    pub fn add_route(mut self, route: Route, handler: Arc<dyn Handler>) -> Self {
        self.routes.push((route, handler));
        self
    }

    /// Sets the bot's own username so commands addressed to other bots are not dispatched.
    pub fn with_bot_username(mut self, bot_username: Option<String>) -> Self {
        self.bot_username = bot_username;
        self
    }

    /// Routes registered so far, in order.
    pub fn routes(&self) -> Vec<Route> {
        self.routes.iter().map(|(route, _)| *route).collect()
    }

    /// Handler registered for `route`, if any.
    pub fn handler_for(&self, route: Route) -> Option<&Arc<dyn Handler>> {
        self.routes
            .iter()
            .find(|(registered, _)| *registered == route)
            .map(|(_, handler)| handler)
    }

    /// Runs middleware before, the routed handler, then middleware after in reverse.
    /// Returns Stop if a middleware stopped the chain, Ignore if no handler matched, else the handler's response.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain started"
        );

        for mw in &self.middleware {
            let mw_name = std::any::type_name_of_val(mw.as_ref());
            debug!(middleware = %mw_name, "step: middleware before");
            if !mw.before(message).await? {
                info!(
                    user_id = message.user.id,
                    middleware = %mw_name,
                    "step: middleware before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        let route = Route::classify(message, self.bot_username.as_deref());
        let final_response = match route.and_then(|r| self.handler_for(r).map(|h| (r, h))) {
            Some((route, handler)) => {
                let handler_name = std::any::type_name_of_val(handler.as_ref());
                info!(
                    chat_id = message.chat.id,
                    message_id = %message.id,
                    route = %route,
                    handler = %handler_name,
                    "step: handler processing"
                );
                let response = handler.handle(message).await?;
                debug!(handler = %handler_name, response = ?response, "Handler processed");
                response
            }
            None => {
                debug!(
                    chat_id = message.chat.id,
                    message_id = %message.id,
                    route = ?route,
                    "No handler registered, message ignored"
                );
                HandlerResponse::Ignore
            }
        };

        for mw in self.middleware.iter().rev() {
            let mw_name = std::any::type_name_of_val(mw.as_ref());
            debug!(middleware = %mw_name, "step: middleware after");
            mw.after(message, &final_response).await?;
        }

        info!(
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }
}

// Tests live in tests/handler_chain_test.rs
