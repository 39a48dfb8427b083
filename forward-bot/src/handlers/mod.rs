//! Handler implementations: greeting, help, document and message forwarding, logging middleware.

mod forward_document;
mod forward_message;
mod help;
mod logging;
mod start;

pub use forward_document::{
    ForwardDocumentHandler, DOCUMENT_CAPTION, DOCUMENT_FORWARDED_TEXT,
};
pub use forward_message::{ForwardMessageHandler, MESSAGE_FORWARDED_TEXT};
pub use help::{HelpHandler, HELP_TEXT};
pub use logging::LoggingHandler;
pub use start::StartHandler;

use dbot_core::{DbotError, Message};

/// Diagnostic sent to the origin when a forward fails: the error text plus where the message came from.
pub(crate) fn failure_text(what: &str, err: &DbotError, message: &Message) -> String {
    format!(
        "Failed to forward {}: {} chat id: {} message id: {}",
        what, err, message.chat.id, message.id
    )
}
