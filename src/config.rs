use anyhow::{bail, Result};
use tracing::debug;

/// Environment key holding the Telegram bot token.
pub const TOKEN_KEY: &str = "TELEGRAM_BOT_TOKEN";

/// Address the webhook server listens on.
pub const LISTEN_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load from the process environment, after merging an optional `.env`
    /// file from the working directory. Variables already set take precedence.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment file: {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(e) => return Err(e.into()),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = match lookup(TOKEN_KEY) {
            Some(token) if !token.trim().is_empty() => token.trim().to_string(),
            _ => bail!("{} is not defined in environment variables", TOKEN_KEY),
        };

        Ok(Self { bot_token })
    }
}
