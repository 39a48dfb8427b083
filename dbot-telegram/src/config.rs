//! 框架最小配置：仅 token、API URL、日志路径。
//! 与外部交互：从环境变量 TOKEN_ENV（或 BOT_TOKEN）、TELEGRAM_API_URL（或 TELOXIDE_API_URL）、LOG_FILE 加载。

use anyhow::Result;
use std::env;
use tracing::error;

/// 未设置 LOG_FILE 时的默认日志路径。
pub const DEFAULT_LOG_FILE: &str = "logs/forward-bot.log";

/// Telegram Bot 框架最小配置（仅 Telegram 接入与日志）。
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
}

impl TelegramConfig {
    /// 从环境变量加载；`token` 优先于 TOKEN_ENV / BOT_TOKEN。
    /// 缺少 token 不在此处报错：保持为空，由 Telegram 在首次调用时拒绝。
    pub fn load(token: Option<String>) -> Self {
        let bot_token = token
            .or_else(|| env::var("TOKEN_ENV").ok())
            .or_else(|| env::var("BOT_TOKEN").ok())
            .unwrap_or_default();
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Self {
            bot_token,
            telegram_api_url,
            log_file,
        }
    }

    /// 使用给定 token 构造，其余字段取默认值。
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// 校验：telegram_api_url 若已设置则必须是合法 URL。
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// 创建 teloxide Bot；设置了 telegram_api_url 时指向该地址。
    pub fn build_bot(&self) -> teloxide::Bot {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "TOKEN_ENV",
            "BOT_TOKEN",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
            "LOG_FILE",
        ] {
            env::remove_var(key);
        }
    }

    /// **Test: with_token sets bot_token; telegram_api_url is None and log_file is the default.**
    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    #[serial]
    fn test_load_prefers_token_env_over_bot_token() {
        clear_env();
        env::set_var("TOKEN_ENV", "primary");
        env::set_var("BOT_TOKEN", "fallback");

        assert_eq!(TelegramConfig::load(None).bot_token, "primary");

        env::remove_var("TOKEN_ENV");
        assert_eq!(TelegramConfig::load(None).bot_token, "fallback");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_override_token_wins() {
        clear_env();
        env::set_var("TOKEN_ENV", "env_token");

        let config = TelegramConfig::load(Some("cli_token".to_string()));

        assert_eq!(config.bot_token, "cli_token");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_missing_token_is_empty() {
        clear_env();

        let config = TelegramConfig::load(None);

        assert!(config.bot_token.is_empty());
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    #[serial]
    fn test_load_api_url_falls_back_to_teloxide_var() {
        clear_env();
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
        env::set_var("LOG_FILE", "/tmp/bot.log");

        let config = TelegramConfig::load(None);

        assert_eq!(config.telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));
        assert_eq!(config.log_file, "/tmp/bot.log");
        clear_env();
    }

    #[test]
    fn test_validate_rejects_invalid_api_url() {
        let mut config = TelegramConfig::with_token("t".to_string());
        config.telegram_api_url = Some("not-a-valid-url".to_string());
        assert!(config.validate().is_err());

        config.telegram_api_url = Some("http://localhost:8081".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_build_bot_uses_api_url() {
        let mut config = TelegramConfig::with_token("t".to_string());
        config.telegram_api_url = Some("http://localhost:8081/".to_string());

        let bot = config.build_bot();

        assert_eq!(bot.api_url().as_str(), "http://localhost:8081/");
        assert_eq!(bot.token(), "t");
    }
}
