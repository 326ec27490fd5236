//! Hook command - register a deployment as the bot's webhook.

use crate::cli::{banner, block_on, output};
use crate::core::local::{or_local, LocalConfig};
use crate::core::register::register_webhook;
use crate::core::telegram::HttpConnector;
use crate::core::vercel::VercelClient;
use crate::error::Result;

/// Register `https://<deployment><route>?secret=...` with Telegram.
pub fn execute(
    deployment: &str,
    route: &str,
    token: Option<String>,
    show_banner: bool,
) -> Result<()> {
    if show_banner {
        banner::print_banner();
    }

    let from_file = token.as_deref().unwrap_or("").is_empty();
    let token = or_local(token, || LocalConfig::new().auth_token())?;

    output::section("Settings");
    output::kv("deployment:  ", deployment);
    output::kv("bot route:   ", route);
    if from_file {
        output::kv("vercel token:", "(from vercel login)");
    } else {
        output::kv("vercel token:", output::redact(&token, 4));
    }
    println!();

    let client = VercelClient::from_env(token)?;
    let connector = HttpConnector::from_env()?;
    let registration = block_on(register_webhook(&client, &connector, deployment, route))??;

    let bot = registration
        .bot_username
        .as_deref()
        .map(|name| format!("@{name}"))
        .unwrap_or_else(|| "(no username)".to_string());
    output::kv("bot:     ", bot);
    output::kv("target:  ", registration.target);
    output::kv(
        "webhook: ",
        format!(
            "https://{}{}?secret=…",
            registration.domain,
            registration.webhook_url.path()
        ),
    );
    output::success(&format!("webhook set: {}", registration.description));
    Ok(())
}
