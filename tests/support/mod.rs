//! Test support utilities for tgvercel integration tests.
//!
//! Every test gets its own project dir and home dir, and points the binary
//! at local mock servers instead of the real APIs.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::Path;

use tempfile::TempDir;
use tgvercel::core::constants;

/// Test environment with isolated temp directories.
///
/// No process-global state is mutated; child processes get their
/// environment and working directory explicitly.
pub struct Test {
    /// Directory the binary runs in
    pub dir: TempDir,
    /// HOME of the binary
    pub home: TempDir,
    vercel_api: String,
    telegram_api: String,
}

/// Nothing listens here; requests that escape the mocks fail fast.
const UNREACHABLE: &str = "http://127.0.0.1:9";

impl Test {
    /// Environment whose API calls go nowhere.
    pub fn new() -> Self {
        Self::with_apis(UNREACHABLE, UNREACHABLE)
    }

    /// Environment talking to the given Vercel and Telegram base URLs.
    pub fn with_apis(vercel_api: &str, telegram_api: &str) -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            home: TempDir::new().expect("failed to create temp home"),
            vercel_api: vercel_api.to_string(),
            telegram_api: telegram_api.to_string(),
        }
    }

    /// Write the auth file `vercel login` would leave behind.
    pub fn login(&self, token: &str) {
        write_json(
            &self.home.path().join(constants::AUTH_FILE),
            &format!(r#"{{"token":"{token}"}}"#),
        );
    }

    /// Write the project file `vercel link` would leave behind.
    pub fn link(&self, project_id: &str) {
        write_json(
            &self.dir.path().join(constants::PROJECT_FILE),
            &format!(r#"{{"projectId":"{project_id}","orgId":"team_1"}}"#),
        );
    }
}

fn write_json(path: &Path, content: &str) {
    let parent = path.parent().expect("path has a parent");
    std::fs::create_dir_all(parent).expect("failed to create dir");
    std::fs::write(path, content).expect("failed to write file");
}
