//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the text sent back to the origin so `after()` can see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Handler did nothing conclusive.
    Continue,
    /// Middleware stopped the chain; no handler ran.
    Stop,
    /// No handler is registered for this message.
    Ignore,
    /// Handler replied to the origin with this text.
    Reply(String),
}
