pub mod telegram;

pub const WELCOME_TEXT: &str = "Welcome! I am your Telegram bot powered by Rust.";
pub const HELP_TEXT: &str = "This is a Telegram bot built with Rust, axum, and teloxide.";
pub const FALLBACK_TEXT: &str = "I can only handle text messages for now.";

/// What an incoming message asks of the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Start,
    Help,
    /// Plain text, including commands the bot does not know.
    Text(String),
    /// Any non-text content (photo, sticker, location, ...).
    Other,
}

impl Inbound {
    /// Classify a message by its text. Commands addressed to another bot
    /// (`/start@other_bot`) fall through to `Text`.
    pub fn classify(text: Option<&str>, bot_username: Option<&str>) -> Self {
        let Some(text) = text else {
            return Inbound::Other;
        };

        match command_name(text, bot_username) {
            Some("start") => Inbound::Start,
            Some("help") => Inbound::Help,
            _ => Inbound::Text(text.to_string()),
        }
    }

    /// The single reply this message gets.
    pub fn reply(&self) -> String {
        match self {
            Inbound::Start => WELCOME_TEXT.to_string(),
            Inbound::Help => HELP_TEXT.to_string(),
            Inbound::Text(text) => format!("You said: {}", text),
            Inbound::Other => FALLBACK_TEXT.to_string(),
        }
    }
}

/// Extract the command name from the first token, if it is a command meant
/// for this bot.
fn command_name<'a>(text: &'a str, bot_username: Option<&str>) -> Option<&'a str> {
    let token = text.split_whitespace().next()?;
    let command = token.strip_prefix('/')?;

    match command.split_once('@') {
        Some((name, target)) => match bot_username {
            Some(me) if !me.eq_ignore_ascii_case(target) => None,
            _ => Some(name),
        },
        None => Some(command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_help() {
        assert_eq!(Inbound::classify(Some("/start"), None), Inbound::Start);
        assert_eq!(Inbound::classify(Some("/help"), None), Inbound::Help);
    }

    #[test]
    fn test_start_with_payload() {
        assert_eq!(
            Inbound::classify(Some("/start ref-42"), Some("relay_bot")),
            Inbound::Start
        );
    }

    #[test]
    fn test_addressed_commands() {
        assert_eq!(
            Inbound::classify(Some("/help@Relay_Bot"), Some("relay_bot")),
            Inbound::Help
        );
        assert_eq!(
            Inbound::classify(Some("/help@other_bot"), Some("relay_bot")),
            Inbound::Text("/help@other_bot".to_string())
        );
        // Username not known yet: accept the command
        assert_eq!(
            Inbound::classify(Some("/start@whoever"), None),
            Inbound::Start
        );
    }

    #[test]
    fn test_commands_are_case_sensitive() {
        assert_eq!(
            Inbound::classify(Some("/START"), None),
            Inbound::Text("/START".to_string())
        );
    }

    #[test]
    fn test_unknown_command_and_plain_text_echo() {
        assert_eq!(
            Inbound::classify(Some("/weather"), None),
            Inbound::Text("/weather".to_string())
        );
        assert_eq!(
            Inbound::classify(Some("start"), None),
            Inbound::Text("start".to_string())
        );
        assert_eq!(
            Inbound::classify(Some(""), None),
            Inbound::Text(String::new())
        );
    }

    #[test]
    fn test_no_text_is_other() {
        assert_eq!(Inbound::classify(None, Some("relay_bot")), Inbound::Other);
    }

    #[test]
    fn test_replies() {
        assert_eq!(Inbound::Start.reply(), WELCOME_TEXT);
        assert_eq!(Inbound::Help.reply(), HELP_TEXT);
        assert_eq!(Inbound::Other.reply(), FALLBACK_TEXT);
        assert_eq!(
            Inbound::Text("hello".to_string()).reply(),
            "You said: hello"
        );
        assert_eq!(
            Inbound::Text("  spaced\nout  ".to_string()).reply(),
            "You said:   spaced\nout  "
        );
    }
}
