//! tgvercel - Telegram bots running as Vercel functions.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Store bot token + webhook secret in a project
//! │   ├── hook          # Register a deployment as the bot's webhook
//! │   ├── serve         # Run the runtime routes locally
//! │   ├── local         # Long-polling mode
//! │   └── completions   # Shell completions
//! ├── core/             # Core library components
//! │   ├── local         # Vercel CLI auth/project files
//! │   ├── target        # Deployment environments
//! │   ├── vercel/       # Vercel REST client (Hosting trait)
//! │   ├── telegram/     # Bot API client (BotApi, Connector traits)
//! │   ├── webhook       # Webhook URL and secret helpers
//! │   ├── provision     # `init` workflow
//! │   └── register      # `hook` workflow
//! ├── runtime/          # Inside the deployed function
//! │   ├── mod           # TgVercel facade + axum router
//! │   ├── options       # Routes and variable names
//! │   ├── env           # EnvSource trait
//! │   └── polling       # run_local
//! └── error             # Error taxonomy
//! ```
//!
//! # Features
//!
//! - Writes `TELEGRAM_TOKEN` and `TELEGRAM_WEBHOOK_SECRET` as encrypted
//!   project variables, scoped to one target
//! - Registers `https://<deployment><route>?secret=<secret>` with Telegram
//! - Webhook handler that only dispatches updates carrying the secret
//! - Key-protected setup endpoint that registers the running deployment

pub mod cli;
pub mod core;
pub mod error;
pub mod runtime;
