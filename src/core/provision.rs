//! Provisioning: store the bot token and webhook secret in a Vercel project.

use tracing::info;

use crate::core::constants;
use crate::core::local::{or_local, LocalConfig};
use crate::core::target::Target;
use crate::core::vercel::Hosting;
use crate::core::webhook::generate_secret;
use crate::error::{Result, ValidationError};

/// Raw `init` inputs, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub target: String,
    pub vercel_token: Option<String>,
    pub telegram_token: String,
    pub webhook_secret: Option<String>,
    pub project: Option<String>,
}

/// Fully resolved `init` inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitPlan {
    pub target: Target,
    pub vercel_token: String,
    pub project: String,
    pub telegram_token: String,
    pub webhook_secret: String,
    pub secret_generated: bool,
}

impl InitPlan {
    /// Validate the target, then fill in the token and project from the
    /// Vercel CLI files and generate a webhook secret where missing.
    ///
    /// # Errors
    ///
    /// `ValidationError` for an unknown target or an empty bot token,
    /// `ConfigError` when a fallback file cannot be read.
    pub fn resolve(options: InitOptions, local: &LocalConfig) -> Result<Self> {
        let target: Target = options.target.parse()?;

        if options.telegram_token.is_empty() {
            return Err(ValidationError::MissingArgument {
                flag: "--telegram-token",
                env: constants::TELEGRAM_TOKEN_ENV,
            }
            .into());
        }

        let vercel_token = or_local(options.vercel_token, || local.auth_token())?;
        let project = or_local(options.project, || local.project_id())?;

        let (webhook_secret, secret_generated) = match options.webhook_secret {
            Some(secret) if !secret.is_empty() => (secret, false),
            _ => (generate_secret(), true),
        };

        Ok(Self {
            target,
            vercel_token,
            project,
            telegram_token: options.telegram_token,
            webhook_secret,
            secret_generated,
        })
    }
}

/// Write the bot token, then the webhook secret, to the plan's project
/// and target.
///
/// A failed second write leaves the first in place; re-running is safe
/// because writes are upserts.
pub async fn provision(hosting: &dyn Hosting, plan: &InitPlan) -> Result<()> {
    for (key, value) in [
        (constants::TELEGRAM_TOKEN_ENV, plan.telegram_token.as_str()),
        (
            constants::TELEGRAM_WEBHOOK_SECRET_ENV,
            plan.webhook_secret.as_str(),
        ),
    ] {
        info!(key, project = %plan.project, target = %plan.target, "setting environment variable");
        hosting.set_env(&plan.project, key, value, plan.target).await?;
    }
    Ok(())
}
