//! Webhook registration for an existing deployment.

use tracing::info;
use url::Url;

use crate::core::constants;
use crate::core::target::Target;
use crate::core::telegram::Connector;
use crate::core::vercel::{strip_scheme, Hosting};
use crate::core::webhook::webhook_url;
use crate::error::Result;

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub deployment_id: String,
    pub domain: String,
    pub target: Target,
    pub webhook_url: Url,
    pub bot_username: Option<String>,
    pub description: String,
}

/// Point the bot of a deployment's project at that deployment.
///
/// Looks up the deployment, reads the webhook secret and bot token stored
/// for its target, and registers
/// `https://<deployment url><bot_route>?secret=<secret>` with Telegram.
pub async fn register_webhook(
    hosting: &dyn Hosting,
    connector: &dyn Connector,
    deployment_id_or_url: &str,
    bot_route: &str,
) -> Result<Registration> {
    let id_or_url = strip_scheme(deployment_id_or_url);
    let deployment = hosting.get_deployment(id_or_url).await?;
    let target = deployment.target();
    info!(
        deployment = %deployment.id,
        domain = %deployment.url,
        %target,
        "resolved deployment"
    );

    let secret = hosting
        .get_env(
            &deployment.project_id,
            constants::TELEGRAM_WEBHOOK_SECRET_ENV,
            target,
        )
        .await?;
    let token = hosting
        .get_env(&deployment.project_id, constants::TELEGRAM_TOKEN_ENV, target)
        .await?;

    let url = webhook_url(&deployment.url, bot_route, &secret)?;

    let bot = connector.connect(&token)?;
    let me = bot.get_me().await?;
    let description = bot.set_webhook(url.as_str()).await?;
    info!(bot = ?me.username, %description, "webhook registered");

    Ok(Registration {
        deployment_id: deployment.id,
        domain: deployment.url,
        target,
        webhook_url: url,
        bot_username: me.username,
        description,
    })
}
