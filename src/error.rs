//! Error types.
//!
//! Every failure is terminal for the invocation that hit it. The families
//! below let callers tell configuration problems, rejected input, upstream
//! failures and missing variables apart.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::target::Target;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Missing or unreadable configuration: local files, env variables, options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has no `{field}` field", path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("unable to determine {0} directory")]
    NoDirectory(&'static str),

    #[error("{0} is not set")]
    MissingEnv(String),

    #[error("{field} {reason}")]
    InvalidOption { field: &'static str, reason: String },

    #[error("failed to build http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Input rejected before (or instead of) doing any work.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid target: {0} (expected production, preview or development)")]
    InvalidTarget(String),

    #[error("invalid secret")]
    InvalidSecret,

    #[error("invalid key")]
    InvalidKey,

    #[error("{flag} or {env} environment variable is required")]
    MissingArgument {
        flag: &'static str,
        env: &'static str,
    },

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("invalid update payload: {0}")]
    InvalidUpdate(String),
}

/// Failure reported by (or while talking to) Vercel or the Telegram bot API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to {operation}: {source}")]
    Request {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to {operation}: {status} {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("failed to {operation}: unexpected response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to {operation}: {description}")]
    Rejected {
        operation: &'static str,
        description: String,
    },

    #[error("failed to get env descriptor for key {key}: {source}")]
    EnvLookup {
        key: String,
        #[source]
        source: Box<ApiError>,
    },
}

/// A requested environment variable is not available for the target.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("env {0} not found")]
    Env(String),

    #[error("env {0} has no target")]
    NoTarget(String),

    #[error("env {key} not found in target {target}")]
    EnvForTarget { key: String, target: Target },
}

impl Error {
    /// Whether the caller was refused, as opposed to the system being broken.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Error::Validation(ValidationError::InvalidSecret | ValidationError::InvalidKey)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
