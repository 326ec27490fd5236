//! Vercel REST API client.
//!
//! Only the handful of project and deployment endpoints tgvercel needs.
//! Every call authenticates with the bearer token given at construction.
//!
//! ## Endpoints
//!
//! | operation            | request                                   |
//! |----------------------|-------------------------------------------|
//! | set env (upsert)     | `POST /v10/projects/{id}/env?upsert=true` |
//! | list envs            | `GET /v9/projects/{id}/env`               |
//! | get decrypted env    | `GET /v1/projects/{id}/env/{envId}`       |
//! | get deployment       | `GET /v13/deployments/{idOrUrl}`          |

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::target::Target;
use crate::error::{ApiError, ConfigError, Error, Result, ValidationError};

mod types;

pub use types::{find_env, Deployment, EnvDescriptor, EnvList, NewEnv};

const TIMEOUT: Duration = Duration::from_secs(30);

/// Project environment and deployment operations.
///
/// Implemented by [`VercelClient`]; workflows depend on this trait so
/// they can run against an in-memory project in tests.
#[async_trait]
pub trait Hosting: Send + Sync {
    /// Create or overwrite one encrypted variable scoped to `target`.
    async fn set_env(
        &self,
        project_id: &str,
        key: &str,
        value: &str,
        target: Target,
    ) -> Result<()>;

    /// Decrypted value of the first variable named `key`, if it is scoped to `target`.
    async fn get_env(&self, project_id: &str, key: &str, target: Target) -> Result<String>;

    /// Deployment metadata. `id_or_url` must not carry a scheme.
    async fn get_deployment(&self, id_or_url: &str) -> Result<Deployment>;
}

/// HTTP implementation of [`Hosting`].
pub struct VercelClient {
    client: Client,
    base_url: Url,
    token: Zeroizing<String>,
}

impl VercelClient {
    /// Client for `base_url` (e.g. `https://api.vercel.com`).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidUrl` for a malformed base URL.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ValidationError::InvalidUrl(format!("{base_url}: {e}")))?;
        let client = Client::builder()
            .timeout(TIMEOUT)
            .user_agent(concat!("tgvercel/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            base_url,
            token: Zeroizing::new(token.into()),
        })
    }

    /// Client for the public API, or for `TGVERCEL_VERCEL_API_URL` when set.
    pub fn from_env(token: impl Into<String>) -> Result<Self> {
        let base = std::env::var(constants::VERCEL_API_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| constants::VERCEL_API_URL.to_string());
        Self::new(&base, token)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn list_envs(&self, project_id: &str) -> Result<Vec<EnvDescriptor>> {
        const OP: &str = "list envs";
        let url = self.endpoint(&["v9", "projects", project_id, "env"]);
        debug!(%url, "GET");

        let resp = self
            .client
            .get(url)
            .bearer_auth(self.token.as_str())
            .send()
            .await
            .map_err(|source| ApiError::Request {
                operation: OP,
                source: source.without_url(),
            })?;
        let list: EnvList = read_json(OP, expect(OP, resp, &[StatusCode::OK]).await?).await?;
        Ok(list.envs)
    }

    async fn decrypted_env(&self, project_id: &str, env_id: &str) -> Result<String> {
        const OP: &str = "get decrypted env";
        let url = self.endpoint(&["v1", "projects", project_id, "env", env_id]);
        debug!(%url, "GET");

        let resp = self
            .client
            .get(url)
            .bearer_auth(self.token.as_str())
            .send()
            .await
            .map_err(|source| ApiError::Request {
                operation: OP,
                source: source.without_url(),
            })?;
        let env: EnvDescriptor = read_json(OP, expect(OP, resp, &[StatusCode::OK]).await?).await?;
        Ok(env.value)
    }
}

#[async_trait]
impl Hosting for VercelClient {
    async fn set_env(
        &self,
        project_id: &str,
        key: &str,
        value: &str,
        target: Target,
    ) -> Result<()> {
        const OP: &str = "set env";
        let mut url = self.endpoint(&["v10", "projects", project_id, "env"]);
        url.query_pairs_mut().append_pair("upsert", "true");
        debug!(%url, key, %target, "POST");

        let body = NewEnv {
            key,
            value,
            kind: "encrypted",
            target: [target],
            comment: constants::ENV_COMMENT,
        };
        let resp = self
            .client
            .post(url)
            .bearer_auth(self.token.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                operation: OP,
                source: source.without_url(),
            })?;
        expect(OP, resp, &[StatusCode::OK, StatusCode::CREATED]).await?;
        Ok(())
    }

    async fn get_env(&self, project_id: &str, key: &str, target: Target) -> Result<String> {
        let envs = self.list_envs(project_id).await.map_err(|e| match e {
            Error::Api(source) => ApiError::EnvLookup {
                key: key.to_string(),
                source: Box::new(source),
            }
            .into(),
            other => other,
        })?;
        let env = find_env(&envs, key, target)?;
        debug!(key, id = %env.id, "found env");
        self.decrypted_env(project_id, &env.id).await
    }

    async fn get_deployment(&self, id_or_url: &str) -> Result<Deployment> {
        const OP: &str = "get deployment";
        let url = self.endpoint(&["v13", "deployments", id_or_url]);
        debug!(%url, "GET");

        let resp = self
            .client
            .get(url)
            .bearer_auth(self.token.as_str())
            .send()
            .await
            .map_err(|source| ApiError::Request {
                operation: OP,
                source: source.without_url(),
            })?;
        read_json(OP, expect(OP, resp, &[StatusCode::OK]).await?).await
    }
}

/// Pass the response through if its status is one of `accepted`.
async fn expect(
    operation: &'static str,
    resp: Response,
    accepted: &[StatusCode],
) -> Result<Response> {
    let status = resp.status();
    if accepted.contains(&status) {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        operation,
        status: status.as_u16(),
        body,
    }
    .into())
}

async fn read_json<T: DeserializeOwned>(operation: &'static str, resp: Response) -> Result<T> {
    let bytes = resp
        .bytes()
        .await
        .map_err(|source| ApiError::Request {
            operation,
            source: source.without_url(),
        })?;
    let value = serde_json::from_slice(&bytes)
        .map_err(|source| ApiError::Decode { operation, source })?;
    Ok(value)
}

/// Strip an `http://` or `https://` prefix (and a trailing slash) from a
/// deployment id or URL.
pub fn strip_scheme(id_or_url: &str) -> &str {
    let s = id_or_url
        .strip_prefix("https://")
        .or_else(|| id_or_url.strip_prefix("http://"))
        .unwrap_or(id_or_url);
    s.trim_end_matches('/')
}
