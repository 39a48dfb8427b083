//! # dbot-core
//!
//! Core types and traits for the forwarding bot: [`Bot`], [`Handler`], [`Route`], message, document and
//! user types, and tracing initialization. Transport-agnostic; used by dbot-telegram, handler-chain and forward-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Document, Handler, HandlerResponse, Message, MessageType, Route, ToCoreMessage,
    ToCoreUser, User,
};
