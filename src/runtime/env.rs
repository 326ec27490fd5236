//! Where the runtime reads its variables from.

use std::collections::HashMap;

use crate::error::{ConfigError, Result};

/// Read-only view of environment variables. Empty values count as unset.
pub trait EnvSource: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;

    /// Value of `name`, or `ConfigError::MissingEnv` naming it.
    fn require(&self, name: &str) -> Result<String> {
        self.get(name)
            .ok_or_else(|| ConfigError::MissingEnv(name.to_string()).into())
    }
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).filter(|v| !v.is_empty()).cloned()
    }
}
