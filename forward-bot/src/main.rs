//! forward-bot binary: loads `.env`, parses the CLI, runs the bot until Ctrl-C.

use anyhow::Result;
use clap::Parser;
use forward_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            token,
            forward_text,
        } => {
            let config = load_config(token, forward_text)?;
            run_bot(config).await
        }
    }
}
