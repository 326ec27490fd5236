//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;
use tgvercel::core::constants;

impl Test {
    /// Create a tgvercel command with an isolated environment.
    ///
    /// - HOME set to the temporary home directory
    /// - current directory set to the test project directory
    /// - API base URLs pointed at the test's servers
    /// - token variables from the caller's shell removed
    /// - stdin piped, so nothing prompts
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("tgvercel").expect("failed to find tgvercel binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env(constants::VERCEL_API_URL_ENV, &self.vercel_api);
        cmd.env(constants::TELEGRAM_API_URL_ENV, &self.telegram_api);
        for var in [
            constants::VERCEL_TOKEN_ENV,
            constants::TELEGRAM_TOKEN_ENV,
            constants::TELEGRAM_WEBHOOK_SECRET_ENV,
            constants::LOG_ENV,
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd.write_stdin("");
        cmd
    }

    /// Run `tgvercel init --no-banner <args>`.
    pub fn init(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(["init", "--no-banner"])
            .args(args)
            .output()
            .expect("failed to run tgvercel init")
    }

    /// Run `tgvercel hook --no-banner <args>`.
    pub fn hook(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(["hook", "--no-banner"])
            .args(args)
            .output()
            .expect("failed to run tgvercel hook")
    }
}

/// Run a blocking command from async test code.
pub async fn run<F>(f: F) -> Output
where
    F: FnOnce() -> Output + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("command task panicked")
}
