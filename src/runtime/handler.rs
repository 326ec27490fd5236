//! Application hook for incoming updates.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::core::telegram::{BotApi, Update};

/// Receives every accepted update together with the bot client.
#[async_trait]
pub trait UpdateHandler: Send + Sync {
    async fn handle(&self, bot: Arc<dyn BotApi>, update: Update);
}

/// Logs each update and does nothing else. Used by `serve` and `local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogUpdates;

#[async_trait]
impl UpdateHandler for LogUpdates {
    async fn handle(&self, _bot: Arc<dyn BotApi>, update: Update) {
        match update.message() {
            Some(message) => info!(
                update_id = update.update_id,
                chat = message.chat.id,
                text = message.text.as_deref().unwrap_or(""),
                "update"
            ),
            None => info!(update_id = update.update_id, "update without message"),
        }
    }
}
