//! Process entry: logging, Telegram client, handler chain, REPL.

use anyhow::{Context, Result};
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::config::BotConfig;
use crate::dispatch::build_handler_chain;

/// Main entry: validate config, init logging, build the chain around a teloxide-backed Bot, then run the REPL.
/// Returns only after teloxide stops (Ctrl-C).
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    if let Some(dir) = Path::new(config.log_file()).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        }
    }
    init_tracing(config.log_file())?;

    info!(
        destination = %config.destination_chat_id,
        forward_text_messages = config.forward_text_messages,
        api_url = ?config.telegram.telegram_api_url,
        "Initializing bot"
    );

    if config.bot_token().is_empty() {
        warn!("TOKEN_ENV / BOT_TOKEN not set; Telegram will reject every request");
    }
    if config.destination_chat_id.is_empty() {
        warn!("destination_group_chat_id_ENV / DESTINATION_CHAT_ID not set; forwards will fail");
    }

    let teloxide_bot = config.telegram.build_bot();
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(&config, bot);

    info!("Bot started successfully");

    run_repl(teloxide_bot, handler_chain).await?;

    info!("Bot stopped");
    Ok(())
}
