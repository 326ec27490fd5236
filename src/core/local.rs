//! Credentials left on disk by the Vercel CLI.
//!
//! Used only as a fallback when a token or project id is not given
//! explicitly. Nothing is cached: every call reads its file again.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

#[derive(Deserialize)]
struct AuthFile {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectFile {
    #[serde(default)]
    project_id: Option<String>,
}

/// Locations of the Vercel CLI auth file and the linked project file.
#[derive(Debug, Clone)]
pub struct LocalConfig {
    auth_path: Option<PathBuf>,
    project_path: PathBuf,
}

impl LocalConfig {
    /// Default locations for the current user and working directory.
    ///
    /// The auth path is resolved lazily so that a missing home directory
    /// only matters when the token is actually needed.
    pub fn new() -> Self {
        Self {
            auth_path: None,
            project_path: PathBuf::from(constants::PROJECT_FILE),
        }
    }

    /// Explicit locations.
    pub fn with_paths(auth_path: impl Into<PathBuf>, project_path: impl Into<PathBuf>) -> Self {
        Self {
            auth_path: Some(auth_path.into()),
            project_path: project_path.into(),
        }
    }

    /// Path of the CLI auth file.
    pub fn auth_path(&self) -> Result<PathBuf> {
        match &self.auth_path {
            Some(path) => Ok(path.clone()),
            None => default_auth_path(),
        }
    }

    /// Path of the linked project file.
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Token written by `vercel login`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, malformed, or has no token.
    pub fn auth_token(&self) -> Result<String> {
        let path = self.auth_path()?;
        let auth: AuthFile = read_json(&path)?;
        non_empty(auth.token, &path, "token")
    }

    /// Project id written by `vercel link`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, malformed, or has no project id.
    pub fn project_id(&self) -> Result<String> {
        let project: ProjectFile = read_json(&self.project_path)?;
        non_empty(project.project_id, &self.project_path, "projectId")
    }
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicit value if given, otherwise the one from `fallback`.
pub fn or_local<F>(explicit: Option<String>, fallback: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    match explicit.filter(|v| !v.is_empty()) {
        Some(value) => Ok(value),
        None => fallback(),
    }
}

fn default_auth_path() -> Result<PathBuf> {
    if cfg!(windows) {
        let dir = dirs::config_dir().ok_or(ConfigError::NoDirectory("config"))?;
        Ok(dir.join(constants::WINDOWS_AUTH_FILE))
    } else {
        let home = dirs::home_dir().ok_or(ConfigError::NoDirectory("home"))?;
        Ok(home.join(constants::AUTH_FILE))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "reading local config");
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(value)
}

fn non_empty(value: Option<String>, path: &Path, field: &'static str) -> Result<String> {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => Ok(v),
        None => Err(ConfigError::MissingField {
            path: path.to_path_buf(),
            field,
        }
        .into()),
    }
}
