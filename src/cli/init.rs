//! Init command - store the bot token and webhook secret in a Vercel project.

use std::io::{self, IsTerminal};

use dialoguer::Password;
use tracing::info;

use crate::cli::{banner, block_on, output};
use crate::core::constants;
use crate::core::local::LocalConfig;
use crate::core::provision::{provision, InitOptions, InitPlan};
use crate::core::target::Target;
use crate::core::vercel::VercelClient;
use crate::error::Result;

/// Values of the `init` flags.
#[derive(Debug, Default)]
pub struct Args {
    pub project: Option<String>,
    pub target: String,
    pub telegram_token: Option<String>,
    pub token: Option<String>,
    pub telegram_webhook_secret: Option<String>,
}

/// Write `TELEGRAM_TOKEN` and `TELEGRAM_WEBHOOK_SECRET` to the project.
pub fn execute(args: Args, show_banner: bool) -> Result<()> {
    // unknown targets fail before any prompt or request
    args.target.parse::<Target>()?;

    if show_banner {
        banner::print_banner();
    }

    let telegram_token = match args.telegram_token.filter(|t| !t.is_empty()) {
        Some(token) => token,
        None => prompt_token()?,
    };

    let plan = InitPlan::resolve(
        InitOptions {
            target: args.target,
            vercel_token: args.token,
            telegram_token,
            webhook_secret: args.telegram_webhook_secret,
            project: args.project,
        },
        &LocalConfig::new(),
    )?;

    output::section("Settings");
    output::kv("project:       ", &plan.project);
    output::kv("target:        ", plan.target);
    output::kv("vercel token:  ", output::redact(&plan.vercel_token, 4));
    output::kv("telegram token:", output::redact(&plan.telegram_token, 4));
    if plan.secret_generated {
        output::kv("webhook secret:", "(generated)");
    } else {
        output::kv("webhook secret:", output::redact(&plan.webhook_secret, 2));
    }
    println!();

    let client = VercelClient::from_env(plan.vercel_token.as_str())?;
    block_on(provision(&client, &plan))??;
    info!(project = %plan.project, target = %plan.target, "provisioned");

    output::success(&format!(
        "set {} and {} for {}",
        output::key(constants::TELEGRAM_TOKEN_ENV),
        output::key(constants::TELEGRAM_WEBHOOK_SECRET_ENV),
        plan.target
    ));
    output::hint(&format!(
        "after deploying, run: tgvercel hook <deployment> {}",
        constants::WEBHOOK_PATH
    ));
    Ok(())
}

/// Ask for the bot token when attached to a terminal.
///
/// Returns an empty token otherwise so resolution reports the missing flag.
fn prompt_token() -> Result<String> {
    if !io::stdin().is_terminal() {
        return Ok(String::new());
    }
    let token = Password::new()
        .with_prompt("Telegram bot token")
        .allow_empty_password(true)
        .interact()?;
    Ok(token)
}
