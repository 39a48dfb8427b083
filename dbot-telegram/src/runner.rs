//! REPL 运行：将 teloxide 消息转为 core::Message 后交给 HandlerChain 处理。
//! 启动时调用一次 get_me，用于区分发给其他 bot 的命令。

use anyhow::Result;
use dbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// 使用给定的 teloxide Bot 与 HandlerChain 启动长轮询 REPL。
/// 每条消息转为 core::Message 后在独立 task 中交给 chain.handle，处理错误只记录日志。
/// teloxide 收到 Ctrl-C 停止后返回。
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let bot_username = match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                info!(username = %username, "Bot username set before repl");
            }
            me.user.username.clone()
        }
        Err(e) => {
            warn!(error = %e, "get_me failed; commands for other bots will not be filtered");
            None
        }
    };

    let chain = handler_chain.with_bot_username(bot_username);
    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();

            async move {
                let core_msg = TelegramMessageWrapper(&msg).to_core();

                match msg.text() {
                    Some(text) => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            message_content = %text,
                            "Received message"
                        );
                    }
                    None => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            message_type = ?core_msg.message_type,
                            "Received non-text message"
                        );
                    }
                }

                // One task per message; the REPL returns immediately.
                tokio::spawn(async move {
                    if let Err(e) = chain.handle(&core_msg).await {
                        error!(
                            error = %e,
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            message_id = %core_msg.id,
                            "Handler chain failed"
                        );
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
