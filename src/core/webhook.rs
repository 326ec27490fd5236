//! Webhook URL and secret helpers.

use url::Url;

use crate::core::constants;
use crate::error::{Result, ValidationError};

/// `https://<domain><route>?secret=<secret>`, with the secret percent-encoded.
///
/// # Errors
///
/// Returns `ValidationError::InvalidUrl` if `domain` is not a valid host.
pub fn webhook_url(domain: &str, route: &str, secret: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("https://{domain}"))
        .map_err(|e| ValidationError::InvalidUrl(format!("{domain}: {e}")))?;
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(ValidationError::InvalidUrl(domain.to_string()).into());
    }
    url.set_path(route);
    url.query_pairs_mut()
        .append_pair(constants::SECRET_PARAM, secret);
    Ok(url)
}

/// Fresh random webhook secret.
pub fn generate_secret() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Public host of the running deployment.
///
/// Production deployments answer on the project's fixed production host
/// when one is configured; everything else uses the generated host.
pub fn public_domain<'a>(
    vercel_env: &str,
    generated: &'a str,
    production: Option<&'a str>,
) -> &'a str {
    match production {
        Some(fixed) if vercel_env == "production" && !fixed.is_empty() => fixed,
        _ => generated,
    }
}
