//! Telegram bot API client.
//!
//! A bot client is bound to one token. [`Connector`] turns a token into a
//! client so callers that only learn the token at run time (the `hook`
//! command, the runtime facade) can be handed a fake in tests.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ApiError, ConfigError, Result};

mod types;

pub use types::{ApiResponse, Chat, Message, Update, User};

const TIMEOUT: Duration = Duration::from_secs(30);

/// Bot API operations used by tgvercel.
#[async_trait]
pub trait BotApi: Send + Sync {
    /// Account the token belongs to.
    async fn get_me(&self) -> Result<User>;

    /// Register `url` as the webhook; an empty `url` removes it.
    ///
    /// Returns Telegram's description on success.
    async fn set_webhook(&self, url: &str) -> Result<String>;

    /// Long-poll for updates starting at `offset`.
    async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>>;
}

/// Builds a bot client from a token.
pub trait Connector: Send + Sync {
    fn connect(&self, token: &str) -> Result<Arc<dyn BotApi>>;
}

/// HTTP implementation of [`BotApi`].
pub struct TelegramBot {
    client: Client,
    api_base: String,
    token: Zeroizing<String>,
}

impl TelegramBot {
    pub fn new(client: Client, api_base: &str, token: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            token: Zeroizing::new(token.to_string()),
        }
    }

    // Carries the token; never let it reach an error message.
    fn url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token.as_str(), method)
    }

    /// Send one request and return the envelope of a successful call.
    ///
    /// Telegram reports failures as `ok: false` with a description,
    /// usually alongside a 4xx status.
    async fn request<B, T>(
        &self,
        operation: &'static str,
        method: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<ApiResponse<T>>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        debug!(method, "telegram request");
        let resp = self
            .client
            .post(self.url(method))
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                operation,
                source: source.without_url(),
            })?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|source| ApiError::Request {
                operation,
                source: source.without_url(),
            })?;
        let parsed: ApiResponse<T> = match serde_json::from_slice(&bytes) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(ApiError::Status {
                    operation,
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                }
                .into());
            }
            Err(source) => return Err(ApiError::Decode { operation, source }.into()),
        };

        if !parsed.ok {
            return Err(ApiError::Rejected {
                operation,
                description: parsed
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            }
            .into());
        }
        Ok(parsed)
    }

    async fn call<B, T>(
        &self,
        operation: &'static str,
        method: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let parsed = self.request(operation, method, body, timeout).await?;
        parsed.result.ok_or_else(|| {
            ApiError::Rejected {
                operation,
                description: "response has no result".to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl BotApi for TelegramBot {
    async fn get_me(&self) -> Result<User> {
        self.call("get bot info", "getMe", &serde_json::json!({}), TIMEOUT)
            .await
    }

    async fn set_webhook(&self, url: &str) -> Result<String> {
        let body = serde_json::json!({ "url": url });
        let parsed: ApiResponse<serde_json::Value> = self
            .request("set webhook", "setWebhook", &body, TIMEOUT)
            .await?;
        Ok(parsed.description.unwrap_or_default())
    }

    async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>> {
        let body = serde_json::json!({ "offset": offset, "timeout": timeout_secs });
        self.call(
            "get updates",
            "getUpdates",
            &body,
            TIMEOUT + Duration::from_secs(timeout_secs),
        )
        .await
    }
}

/// [`Connector`] producing [`TelegramBot`]s that share one HTTP client.
#[derive(Clone)]
pub struct HttpConnector {
    client: Client,
    api_base: String,
}

impl HttpConnector {
    /// Connector for `api_base` (e.g. `https://api.telegram.org`).
    pub fn new(api_base: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("tgvercel/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self {
            client,
            api_base: api_base.to_string(),
        })
    }

    /// Connector for the public API, or for `TGVERCEL_TELEGRAM_API_URL` when set.
    pub fn from_env() -> Result<Self> {
        let base = std::env::var(constants::TELEGRAM_API_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| constants::TELEGRAM_API_URL.to_string());
        Self::new(&base)
    }
}

impl Connector for HttpConnector {
    fn connect(&self, token: &str) -> Result<Arc<dyn BotApi>> {
        Ok(Arc::new(TelegramBot::new(
            self.client.clone(),
            &self.api_base,
            token,
        )))
    }
}
