//! Deployment targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Environment a Vercel variable can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Production,
    Preview,
    Development,
}

impl Target {
    /// All targets, in Vercel's order.
    pub const ALL: [Target; 3] = [Target::Production, Target::Preview, Target::Development];

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Production => "production",
            Target::Preview => "preview",
            Target::Development => "development",
        }
    }

    /// Target of a deployment from its raw `target` label.
    ///
    /// Only `production` is recognised; every other label, including an
    /// empty or unknown one, is a preview deployment.
    pub fn from_deployment_label(label: &str) -> Self {
        if label == "production" {
            Target::Production
        } else {
            Target::Preview
        }
    }
}

impl FromStr for Target {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Target::Production),
            "preview" => Ok(Target::Preview),
            "development" => Ok(Target::Development),
            other => Err(ValidationError::InvalidTarget(other.to_string())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
