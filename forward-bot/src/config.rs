//! Application config: Telegram connection (TelegramConfig) plus forwarding settings. Loaded from env once at startup.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use std::env;

/// Everything the bot needs, built once and passed by reference to dispatch registration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Token, API URL, log file.
    pub telegram: TelegramConfig,
    /// destination_group_chat_id_ENV or DESTINATION_CHAT_ID: numeric chat id or `@channel`.
    pub destination_chat_id: String,
    /// FORWARD_TEXT_MESSAGES: also forward plain text messages. Off by default.
    pub forward_text_messages: bool,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides TOKEN_ENV / BOT_TOKEN.
    /// Missing token or destination is left empty; Telegram reports it on first use.
    pub fn load(token: Option<String>) -> Self {
        let telegram = TelegramConfig::load(token);
        let destination_chat_id = env::var("destination_group_chat_id_ENV")
            .or_else(|_| env::var("DESTINATION_CHAT_ID"))
            .unwrap_or_default();
        let forward_text_messages = env::var("FORWARD_TEXT_MESSAGES")
            .ok()
            .map(|s| parse_flag(&s))
            .unwrap_or(false);

        Self {
            telegram,
            destination_chat_id,
            forward_text_messages,
        }
    }

    /// Validate config (telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }

    pub fn log_file(&self) -> &str {
        &self.telegram.log_file
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "TOKEN_ENV",
            "BOT_TOKEN",
            "destination_group_chat_id_ENV",
            "DESTINATION_CHAT_ID",
            "FORWARD_TEXT_MESSAGES",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
            "LOG_FILE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("TOKEN_ENV", "test_token");
        env::set_var("destination_group_chat_id_ENV", "-100200");

        let config = BotConfig::load(None);

        assert_eq!(config.bot_token(), "test_token");
        assert_eq!(config.destination_chat_id, "-100200");
        assert!(!config.forward_text_messages);
        assert_eq!(config.log_file(), "logs/forward-bot.log");
        assert!(config.telegram.telegram_api_url.is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_fallback_names() {
        clear_env();
        env::set_var("BOT_TOKEN", "fallback_token");
        env::set_var("DESTINATION_CHAT_ID", "@archive");

        let config = BotConfig::load(None);

        assert_eq!(config.bot_token(), "fallback_token");
        assert_eq!(config.destination_chat_id, "@archive");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_missing_values_are_empty() {
        clear_env();

        let config = BotConfig::load(None);

        assert!(config.bot_token().is_empty());
        assert!(config.destination_chat_id.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_config_forward_text_flag() {
        clear_env();
        for (value, expected) in [
            ("true", true),
            ("1", true),
            ("YES", true),
            ("on", true),
            ("false", false),
            ("0", false),
            ("", false),
        ] {
            env::set_var("FORWARD_TEXT_MESSAGES", value);
            let config = BotConfig::load(None);
            assert_eq!(config.forward_text_messages, expected, "value {:?}", value);
        }
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_telegram_api_url_invalid() {
        clear_env();
        env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

        let config = BotConfig::load(None);
        assert!(config.validate().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_cli_forward_text_overrides_env() {
        clear_env();

        let config = crate::cli::load_config(Some("cli_token".to_string()), true).unwrap();

        assert_eq!(config.bot_token(), "cli_token");
        assert!(config.forward_text_messages);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_cli_load_config_rejects_invalid_api_url() {
        clear_env();
        env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

        assert!(crate::cli::load_config(None, false).is_err());

        clear_env();
    }
}
