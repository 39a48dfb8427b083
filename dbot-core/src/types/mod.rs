//! Core types: user, chat, document, message, route, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod document;
mod handler;
mod message;
mod response;
mod route;
mod user;

pub use chat::Chat;
pub use document::Document;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::{Message, MessageType};
pub use response::HandlerResponse;
pub use route::Route;
pub use user::User;
