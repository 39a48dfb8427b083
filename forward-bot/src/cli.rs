//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "forward-bot")]
#[command(about = "Telegram bot that forwards received documents to a fixed chat", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; flags override).
    Run {
        /// Bot token; overrides TOKEN_ENV / BOT_TOKEN.
        #[arg(short, long)]
        token: Option<String>,
        /// Also forward plain text messages; same as FORWARD_TEXT_MESSAGES=true.
        #[arg(long)]
        forward_text: bool,
    },
}

/// Loads BotConfig from the environment with CLI overrides applied, then validates it.
pub fn load_config(token: Option<String>, forward_text: bool) -> Result<BotConfig> {
    let mut config = BotConfig::load(token);
    if forward_text {
        config.forward_text_messages = true;
    }
    config.validate()?;
    Ok(config)
}
