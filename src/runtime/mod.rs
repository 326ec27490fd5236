//! Request handling inside the deployed function.
//!
//! [`TgVercel`] owns the runtime [`Options`], the environment it reads on
//! every request, and a bot client that is created on first use and then
//! shared for the life of the process.
//!
//! Two endpoints are served:
//!
//! - the webhook route, which only accepts requests whose `secret` query
//!   parameter equals the configured webhook secret, and hands the parsed
//!   update to an [`UpdateHandler`];
//! - the setup route, guarded by a separate service key, which points the
//!   bot's webhook at this deployment's public host.

mod env;
mod handler;
mod options;
mod polling;
mod response;

pub use env::{EnvSource, ProcessEnv};
pub use handler::{LogUpdates, UpdateHandler};
pub use options::Options;
pub use polling::{poll_once, run_local, POLL_TIMEOUT_SECS};

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::core::constants;
use crate::core::telegram::{BotApi, Connector, HttpConnector, Update};
use crate::core::webhook::{public_domain, webhook_url};
use crate::error::{Error, Result, ValidationError};

/// Runtime facade for a bot deployed behind a webhook.
pub struct TgVercel {
    options: Options,
    env: Arc<dyn EnvSource>,
    connector: Arc<dyn Connector>,
    bot: OnceCell<Arc<dyn BotApi>>,
}

impl TgVercel {
    /// Runtime reading the process environment and talking to the real bot API.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOption` if `options` do not validate.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            env: Arc::new(ProcessEnv),
            connector: Arc::new(HttpConnector::from_env()?),
            bot: OnceCell::new(),
        })
    }

    /// Runtime with a pre-built bot client; the token variable is never read.
    pub fn with_bot(options: Options, bot: Arc<dyn BotApi>) -> Result<Self> {
        let mut runtime = Self::new(options)?;
        runtime.bot = OnceCell::from(bot);
        Ok(runtime)
    }

    /// Read variables from `env` instead of the process environment.
    pub fn with_env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Build the bot client through `connector`.
    pub fn with_connector(mut self, connector: Arc<dyn Connector>) -> Self {
        self.connector = connector;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The shared bot client, created on first call.
    ///
    /// Creation reads the token variable and checks it with `getMe`.
    /// Concurrent first callers wait for a single creation; a failed
    /// creation is retried by the next caller.
    pub async fn bot(&self) -> Result<Arc<dyn BotApi>> {
        self.bot
            .get_or_try_init(|| async {
                let token = self.env.require(&self.options.telegram_token_env_name)?;
                let bot = self.connector.connect(&token)?;
                let me = bot.get_me().await?;
                info!(bot = ?me.username, "authorized");
                Ok::<_, Error>(bot)
            })
            .await
            .cloned()
    }

    /// Validate one webhook request and dispatch its update.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingEnv` if the webhook secret variable is unset
    /// - `ValidationError::InvalidSecret` if `secret` does not match exactly
    /// - `ValidationError::InvalidUpdate` if `body` is not an update
    ///
    /// The handler is not called in any of these cases.
    pub async fn handle_webhook(
        &self,
        secret: Option<&str>,
        body: &[u8],
        handler: &dyn UpdateHandler,
    ) -> Result<()> {
        let expected = self
            .env
            .require(&self.options.telegram_webhook_secret_env_name)?;
        if secret != Some(expected.as_str()) {
            warn!("rejected webhook request: invalid secret");
            return Err(ValidationError::InvalidSecret.into());
        }

        let update: Update = serde_json::from_slice(body)
            .map_err(|e| ValidationError::InvalidUpdate(e.to_string()))?;
        let bot = self.bot().await?;
        debug!(update_id = update.update_id, "dispatching update");
        handler.handle(bot, update).await;
        Ok(())
    }

    /// Register this deployment's webhook with Telegram.
    ///
    /// Variables are checked in order (service key, environment name,
    /// generated host, webhook secret) before the key is compared, so a
    /// misconfigured deployment reports what is missing. Returns
    /// Telegram's description.
    pub async fn handle_setup(&self, key: Option<&str>) -> Result<String> {
        let o = &self.options;
        let service_key = self.env.require(&o.key_env_name)?;
        let vercel_env = self.env.require(&o.vercel_env_env_name)?;
        let generated = self.env.require(&o.vercel_url_env_name)?;
        let production = self.env.get(&o.vercel_project_production_url_env_name);
        let secret = self.env.require(&o.telegram_webhook_secret_env_name)?;

        if key != Some(service_key.as_str()) {
            warn!("rejected setup request: invalid key");
            return Err(ValidationError::InvalidKey.into());
        }

        let domain = public_domain(&vercel_env, &generated, production.as_deref());
        let url = webhook_url(domain, &o.webhook_relative_url, &secret)?;

        let bot = self.bot().await?;
        let description = bot.set_webhook(url.as_str()).await?;
        info!(domain, %description, "webhook registered");
        Ok(description)
    }

    /// Router serving the webhook route (POST) and the setup route (GET, POST).
    pub fn router(self, handler: Arc<dyn UpdateHandler>) -> Router {
        let webhook_path = self.options.webhook_relative_url.clone();
        let setup_path = self.options.setup_relative_url.clone();
        let state = AppState {
            runtime: Arc::new(self),
            handler,
        };

        Router::new()
            .route(&webhook_path, post(webhook))
            .route(&setup_path, get(setup).post(setup))
            .with_state(state)
    }
}

#[derive(Clone)]
struct AppState {
    runtime: Arc<TgVercel>,
    handler: Arc<dyn UpdateHandler>,
}

async fn webhook(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<StatusCode> {
    let secret = query_param(query.as_deref(), constants::SECRET_PARAM);
    state
        .runtime
        .handle_webhook(secret.as_deref(), &body, state.handler.as_ref())
        .await?;
    Ok(StatusCode::OK)
}

async fn setup(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<String>> {
    let key = query_param(query.as_deref(), &state.runtime.options.key_param_name);
    state.runtime.handle_setup(key.as_deref()).await.map(Json)
}

/// First value of `name` in a raw query string; repeats are ignored.
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
