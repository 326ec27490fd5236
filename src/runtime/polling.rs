//! Long-polling mode for running a bot without a public webhook.

use std::sync::Arc;
use tracing::{debug, info};

use crate::core::telegram::BotApi;
use crate::error::Result;
use crate::runtime::UpdateHandler;

/// Seconds each `getUpdates` call may wait for new updates.
pub const POLL_TIMEOUT_SECS: u64 = 60;

/// Remove any registered webhook, then feed updates to `handler` forever.
///
/// Updates are handled one at a time, in order. Returns only on error.
pub async fn run_local(bot: Arc<dyn BotApi>, handler: &dyn UpdateHandler) -> Result<()> {
    let me = bot.get_me().await?;
    info!(bot = ?me.username, "polling for updates");

    bot.set_webhook("").await?;

    let mut offset = 0;
    loop {
        offset = poll_once(&bot, handler, offset).await?;
    }
}

/// Fetch one batch starting at `offset` and dispatch it.
///
/// Returns the offset for the next call: one past the highest update id seen.
pub async fn poll_once(
    bot: &Arc<dyn BotApi>,
    handler: &dyn UpdateHandler,
    offset: i64,
) -> Result<i64> {
    let updates = bot.get_updates(offset, POLL_TIMEOUT_SECS).await?;
    debug!(offset, count = updates.len(), "fetched updates");

    let mut next = offset;
    for update in updates {
        next = next.max(update.update_id + 1);
        handler.handle(Arc::clone(bot), update).await;
    }
    Ok(next)
}
