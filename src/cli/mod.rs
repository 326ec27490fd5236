//! Command-line interface.

pub mod banner;
pub mod completions;
pub mod hook;
pub mod init;
pub mod local;
pub mod output;
pub mod serve;

use clap::{Parser, Subcommand};
use std::future::Future;
use std::net::SocketAddr;

use crate::core::constants;
use crate::error::Result;

/// tgvercel - Telegram bots on Vercel.
#[derive(Parser)]
#[command(
    name = "tgvercel",
    about = "Set up Telegram bots running as Vercel functions",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Store the bot token and webhook secret in a Vercel project
    Init {
        /// Project id or name (default: the project linked in .vercel/project.json)
        project: Option<String>,

        /// Target environment: production, preview or development
        #[arg(long, default_value = "preview")]
        target: String,

        /// Telegram bot token
        #[arg(long, env = constants::TELEGRAM_TOKEN_ENV, hide_env_values = true)]
        telegram_token: Option<String>,

        /// Vercel token (default: the token saved by `vercel login`)
        #[arg(long, env = constants::VERCEL_TOKEN_ENV, hide_env_values = true)]
        token: Option<String>,

        /// Webhook secret (default: randomly generated)
        #[arg(long, env = constants::TELEGRAM_WEBHOOK_SECRET_ENV, hide_env_values = true)]
        telegram_webhook_secret: Option<String>,
    },

    /// Point the bot's webhook at a deployment
    Hook {
        /// Deployment id or URL
        deployment: String,

        /// Route of the bot function, e.g. /api/tg/webhook
        route: String,

        /// Vercel token (default: the token saved by `vercel login`)
        #[arg(long, env = constants::VERCEL_TOKEN_ENV, hide_env_values = true)]
        token: Option<String>,
    },

    /// Serve the webhook and setup routes locally
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },

    /// Run the bot with long polling instead of a webhook
    Local {
        /// Telegram bot token
        #[arg(long, env = constants::TELEGRAM_TOKEN_ENV, hide_env_values = true)]
        telegram_token: Option<String>,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    let banner = !cli.no_banner;

    match cli.command {
        Command::Init {
            project,
            target,
            telegram_token,
            token,
            telegram_webhook_secret,
        } => init::execute(
            init::Args {
                project,
                target,
                telegram_token,
                token,
                telegram_webhook_secret,
            },
            banner,
        ),
        Command::Hook {
            deployment,
            route,
            token,
        } => hook::execute(&deployment, &route, token, banner),
        Command::Serve { bind } => serve::execute(bind),
        Command::Local { telegram_token } => local::execute(telegram_token),
        Command::Completions { shell } => completions::execute(shell),
    }
}

/// Drive `future` to completion on a single-threaded runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(future))
}
