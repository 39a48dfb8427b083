//! Route classification: which registered handler an inbound message belongs to.

use std::fmt;

use super::message::Message;

/// Handler slot for an inbound message. Resolved once per message by [`Route::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/start` command.
    Start,
    /// `/help` command.
    Help,
    /// Any message carrying a document.
    Document,
    /// Text that is not a command.
    PlainText,
}

impl Route {
    /// Classifies `message`. `bot_username` (without `@`) filters out commands addressed to other bots;
    /// when unknown, every command is taken as ours.
    ///
    /// Documents win over text; unknown commands and non-text messages return `None`.
    pub fn classify(message: &Message, bot_username: Option<&str>) -> Option<Route> {
        if message.document.is_some() {
            return Some(Route::Document);
        }

        let text = message.content.as_str();
        if let Some(command) = parse_command(text) {
            if let (Some(target), Some(me)) = (command.target, bot_username) {
                if !target.eq_ignore_ascii_case(me) {
                    return None;
                }
            }
            return match command.name.to_ascii_lowercase().as_str() {
                "start" => Some(Route::Start),
                "help" => Some(Route::Help),
                _ => None,
            };
        }

        if text.is_empty() {
            None
        } else {
            Some(Route::PlainText)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Start => "start",
            Route::Help => "help",
            Route::Document => "document",
            Route::PlainText => "plain_text",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Command<'a> {
    name: &'a str,
    target: Option<&'a str>,
}

fn is_command_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Leading `/name[@bot]` of `text`, the way Telegram marks bot commands at offset 0.
fn parse_command(text: &str) -> Option<Command<'_>> {
    let rest = text.strip_prefix('/')?;
    let name_len = rest.find(|c| !is_command_char(c)).unwrap_or(rest.len());
    if name_len == 0 {
        return None;
    }
    let name = &rest[..name_len];

    let target = rest[name_len..].strip_prefix('@').and_then(|after| {
        let len = after.find(|c| !is_command_char(c)).unwrap_or(after.len());
        (len > 0).then(|| &after[..len])
    });

    Some(Command { name, target })
}
