//! # dbot-telegram
//!
//! Telegram layer: teloxide → core adapters, [`dbot_core::Bot`] implementation, minimal config, REPL runner.
//! Handles Telegram connectivity and handler-chain execution only; what to do with a message lives in forward-bot.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{parse_recipient, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::run_repl;
