//! # forward-bot
//!
//! Greets on `/start`, answers `/help`, and forwards every received document to one configured chat,
//! reporting success or a diagnostic back to the sender. Forwarding plain text messages is available
//! behind a config flag and off by default.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod handlers;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use dispatch::build_handler_chain;
pub use handlers::{
    ForwardDocumentHandler, ForwardMessageHandler, HelpHandler, LoggingHandler, StartHandler,
};
pub use runner::run_bot;
