//! Local command - run the bot with long polling.

use tracing::info;

use crate::cli::serve::shutdown_signal;
use crate::cli::{block_on, output};
use crate::core::constants;
use crate::core::telegram::{Connector, HttpConnector};
use crate::error::{Result, ValidationError};
use crate::runtime::{run_local, LogUpdates};

/// Poll for updates until interrupted.
///
/// Removes the registered webhook first; run `tgvercel hook` again to restore it.
pub fn execute(telegram_token: Option<String>) -> Result<()> {
    let token = telegram_token
        .filter(|t| !t.is_empty())
        .ok_or(ValidationError::MissingArgument {
            flag: "--telegram-token",
            env: constants::TELEGRAM_TOKEN_ENV,
        })?;

    let bot = HttpConnector::from_env()?.connect(&token)?;
    output::warn("the registered webhook will be removed while polling");

    block_on(async {
        tokio::select! {
            result = run_local(bot, &LogUpdates) => result,
            () = shutdown_signal() => {
                info!("interrupted");
                Ok(())
            }
        }
    })?
}
