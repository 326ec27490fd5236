//! tgvercel - Telegram bots on Vercel.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tgvercel::cli::output;
use tgvercel::cli::{execute, Cli};
use tgvercel::core::constants;
use tgvercel::error::{ConfigError, Error, NotFoundError, ValidationError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("tgvercel=debug")
        } else {
            EnvFilter::new("tgvercel=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Config(ConfigError::ReadFile { path, .. })
        | Error::Config(ConfigError::Parse { path, .. })
        | Error::Config(ConfigError::MissingField { path, .. }) => local_file_hint(path),
        Error::Validation(ValidationError::MissingArgument { .. }) => {
            Some("see: tgvercel --help")
        }
        Error::NotFound(NotFoundError::EnvForTarget { .. } | NotFoundError::Env(_)) => {
            Some("run: tgvercel init --target <target of the deployment>")
        }
        _ => None,
    }
}

fn local_file_hint(path: &Path) -> Option<&'static str> {
    if path.ends_with(constants::PROJECT_FILE) {
        Some("run: vercel link, or pass the project id")
    } else if path.ends_with("auth.json") {
        Some("run: vercel login, or pass --token")
    } else {
        None
    }
}
