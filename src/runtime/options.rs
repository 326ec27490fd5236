//! Runtime options: routes and the names of the variables read per request.

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Routes and variable names used by [`TgVercel`](super::TgVercel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Route Telegram posts updates to, e.g. `/api/tg/webhook`.
    pub webhook_relative_url: String,
    /// Route of the setup endpoint, e.g. `/api/tg/setup`.
    pub setup_relative_url: String,
    pub telegram_token_env_name: String,
    pub telegram_webhook_secret_env_name: String,
    pub vercel_env_env_name: String,
    pub vercel_url_env_name: String,
    pub vercel_project_production_url_env_name: String,
    /// Variable holding the setup endpoint's service key.
    pub key_env_name: String,
    /// Query parameter the setup endpoint reads the key from.
    pub key_param_name: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            webhook_relative_url: constants::WEBHOOK_PATH.to_string(),
            setup_relative_url: constants::SETUP_PATH.to_string(),
            telegram_token_env_name: constants::TELEGRAM_TOKEN_ENV.to_string(),
            telegram_webhook_secret_env_name: constants::TELEGRAM_WEBHOOK_SECRET_ENV.to_string(),
            vercel_env_env_name: constants::VERCEL_ENV_ENV.to_string(),
            vercel_url_env_name: constants::VERCEL_URL_ENV.to_string(),
            vercel_project_production_url_env_name: constants::VERCEL_PROJECT_PRODUCTION_URL_ENV
                .to_string(),
            key_env_name: constants::SERVICE_KEY_ENV.to_string(),
            key_param_name: constants::KEY_PARAM.to_string(),
        }
    }
}

impl Options {
    /// Reject empty names and routes that do not start with `/`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOption` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        route("webhook_relative_url", &self.webhook_relative_url)?;
        route("setup_relative_url", &self.setup_relative_url)?;
        if self.webhook_relative_url == self.setup_relative_url {
            return Err(invalid("setup_relative_url", "must differ from webhook_relative_url"));
        }

        for (field, value) in [
            ("telegram_token_env_name", &self.telegram_token_env_name),
            (
                "telegram_webhook_secret_env_name",
                &self.telegram_webhook_secret_env_name,
            ),
            ("vercel_env_env_name", &self.vercel_env_env_name),
            ("vercel_url_env_name", &self.vercel_url_env_name),
            (
                "vercel_project_production_url_env_name",
                &self.vercel_project_production_url_env_name,
            ),
            ("key_env_name", &self.key_env_name),
            ("key_param_name", &self.key_param_name),
        ] {
            if value.is_empty() {
                return Err(invalid(field, "must be set"));
            }
        }
        Ok(())
    }
}

fn route(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(invalid(field, "must be set"));
    }
    if !value.starts_with('/') {
        return Err(invalid(field, "must start with /"));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidOption {
        field,
        reason: reason.to_string(),
    }
    .into()
}
