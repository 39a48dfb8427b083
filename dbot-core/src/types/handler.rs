//! Handler trait and transport conversion traits.

use async_trait::async_trait;

use super::{message::Message, response::HandlerResponse, user::User};

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after.
/// Used both as middleware (before/after around every dispatched message) and as a routed handler (handle).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
