use anyhow::{Context, Result};
use async_trait::async_trait;
use teloxide::prelude::*;
use tracing::debug;

/// The outbound half of the Telegram Bot API that the relay relies on.
#[async_trait]
pub trait TelegramApi: Send + Sync + 'static {
    /// Authenticate against the platform and return the bot's username
    async fn get_me(&self) -> Result<String>;

    /// Send a plain text message to a chat
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()>;
}

#[async_trait]
impl TelegramApi for Bot {
    async fn get_me(&self) -> Result<String> {
        let me = Requester::get_me(self)
            .await
            .context("Telegram rejected getMe")?;
        me.user
            .username
            .clone()
            .context("Telegram returned a bot without a username")
    }

    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        let sent = self
            .send_message(ChatId(chat_id), text.to_string())
            .await
            .with_context(|| format!("Failed to send message to chat {}", chat_id))?;
        debug!(chat_id, message_id = sent.id.0, "Reply delivered");
        Ok(())
    }
}
