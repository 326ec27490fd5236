//! Vercel API payloads.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::target::Target;
use crate::error::{NotFoundError, Result};

/// One project environment variable as returned by the env endpoints.
///
/// The list endpoint never includes a decrypted `value`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EnvDescriptor {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub target: Vec<String>,
}

impl EnvDescriptor {
    /// Whether the variable is scoped to `target`.
    pub fn matches_target(&self, target: Target) -> bool {
        self.target.iter().any(|t| t == target.as_str())
    }
}

/// Body of `GET /v9/projects/{id}/env`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvList {
    #[serde(default)]
    pub envs: Vec<EnvDescriptor>,
}

/// Body of `POST /v10/projects/{id}/env`.
#[derive(Debug, Clone, Serialize)]
pub struct NewEnv<'a> {
    pub key: &'a str,
    pub value: &'a str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub target: [Target; 1],
    pub comment: &'static str,
}

/// Deployment metadata from `GET /v13/deployments/{idOrUrl}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    #[serde(default)]
    pub id: String,
    /// Raw target label; Vercel sends `null` for preview deployments.
    #[serde(default, rename = "target")]
    pub target_raw: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub project_id: String,
}

impl Deployment {
    /// Target the deployment's variables are read from.
    pub fn target(&self) -> Target {
        Target::from_deployment_label(self.target_raw.as_deref().unwrap_or_default())
    }
}

/// First variable named `key`, provided it is scoped to `target`.
///
/// Later entries with the same key are never consulted.
pub fn find_env<'a>(
    envs: &'a [EnvDescriptor],
    key: &str,
    target: Target,
) -> Result<&'a EnvDescriptor> {
    let env = envs
        .iter()
        .find(|e| e.key == key)
        .ok_or_else(|| NotFoundError::Env(key.to_string()))?;

    if env.target.is_empty() {
        return Err(NotFoundError::NoTarget(key.to_string()).into());
    }
    if !env.matches_target(target) {
        return Err(NotFoundError::EnvForTarget {
            key: key.to_string(),
            target,
        }
        .into());
    }
    Ok(env)
}

// Older API versions send a bare string for single-target variables.
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Null(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
        OneOrMany::Null(()) => Vec::new(),
    })
}
