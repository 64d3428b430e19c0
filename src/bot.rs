use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use anyhow::{bail, Context, Result};
use teloxide::types::{Message, Update, UpdateKind};
use tracing::{debug, error, info, warn};

use crate::platform::telegram::TelegramApi;
use crate::platform::Inbound;

/// Owns the bot handle and turns incoming updates into replies.
pub struct BotAdapter<A> {
    api: A,
    username: OnceLock<String>,
    running: AtomicBool,
}

impl<A: TelegramApi> BotAdapter<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            username: OnceLock::new(),
            running: AtomicBool::new(false),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.get().map(String::as_str)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Authenticate with Telegram and mark the bot as running.
    pub async fn initialize(&self) -> Result<()> {
        let result = self.launch().await;
        match &result {
            Ok(()) => info!(
                username = self.username().unwrap_or_default(),
                "Telegram bot launched successfully"
            ),
            Err(e) => error!(error = %format!("{:#}", e), "Failed to launch Telegram bot"),
        }
        result
    }

    async fn launch(&self) -> Result<()> {
        if self.is_running() {
            bail!("Bot is already running");
        }

        let username = self
            .api
            .get_me()
            .await
            .context("Could not authenticate with Telegram")?;
        // A relaunch after shutdown keeps the first username seen
        let _ = self.username.set(username);

        self.running.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Mark the bot as stopped.
    pub async fn shutdown(&self) -> Result<()> {
        if self.running.swap(false, Ordering::SeqCst) {
            info!("Telegram bot stopped successfully");
            Ok(())
        } else {
            let err = anyhow::anyhow!("Bot is not running");
            error!(error = %err, "Failed to stop Telegram bot");
            Err(err)
        }
    }

    /// Decode a raw webhook body and answer it.
    pub async fn dispatch(&self, body: &[u8]) -> Result<()> {
        let update: Update =
            serde_json::from_slice(body).context("Payload is not a Telegram update")?;

        match update.kind {
            UpdateKind::Message(msg) => self.handle_message(&msg).await,
            // Channels only get the echo; other channel content is left alone
            UpdateKind::ChannelPost(post) if post.text().is_some() => {
                self.handle_message(&post).await
            }
            UpdateKind::Error(raw) => {
                warn!(update_id = update.id.0, "Unrecognized update kind: {}", raw);
                Ok(())
            }
            _ => {
                debug!(update_id = update.id.0, "Ignoring non-message update");
                Ok(())
            }
        }
    }

    async fn handle_message(&self, msg: &Message) -> Result<()> {
        let chat_id = msg.chat.id.0;
        let inbound = Inbound::classify(msg.text(), self.username());

        match &inbound {
            Inbound::Text(text) => info!(chat_id, "Received message: {}", text),
            Inbound::Other => info!(chat_id, "Received non-text message"),
            command => debug!(chat_id, ?command, "Received command"),
        }

        self.api.send_text(chat_id, &inbound.reply()).await
    }
}
