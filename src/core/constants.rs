//! Constants used throughout tgvercel.
//!
//! Centralizes endpoints, file locations and default variable names.

/// Vercel REST API base URL.
pub const VERCEL_API_URL: &str = "https://api.vercel.com";

/// Telegram bot API base URL.
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Overrides [`VERCEL_API_URL`] when set.
pub const VERCEL_API_URL_ENV: &str = "TGVERCEL_VERCEL_API_URL";

/// Overrides [`TELEGRAM_API_URL`] when set.
pub const TELEGRAM_API_URL_ENV: &str = "TGVERCEL_TELEGRAM_API_URL";

/// Vercel CLI auth file, relative to HOME (Unix-like systems).
pub const AUTH_FILE: &str = ".local/share/com.vercel.cli/auth.json";

/// Vercel CLI auth file, relative to the roaming config dir (Windows).
pub const WINDOWS_AUTH_FILE: &str = "com.vercel.cli/Data/auth.json";

/// Linked project metadata, relative to the working directory.
pub const PROJECT_FILE: &str = ".vercel/project.json";

/// Env variable holding the Vercel token for the CLI.
pub const VERCEL_TOKEN_ENV: &str = "VERCEL_TOKEN";

/// Default name of the bot token variable.
pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_TOKEN";

/// Default name of the webhook secret variable.
pub const TELEGRAM_WEBHOOK_SECRET_ENV: &str = "TELEGRAM_WEBHOOK_SECRET";

/// Default name of the setup endpoint service key variable.
pub const SERVICE_KEY_ENV: &str = "TGVERCEL_KEY";

/// Vercel system variable: `production`, `preview` or `development`.
pub const VERCEL_ENV_ENV: &str = "VERCEL_ENV";

/// Vercel system variable: generated deployment host.
pub const VERCEL_URL_ENV: &str = "VERCEL_URL";

/// Vercel system variable: fixed production host.
pub const VERCEL_PROJECT_PRODUCTION_URL_ENV: &str = "VERCEL_PROJECT_PRODUCTION_URL";

/// Default webhook route of the deployed function.
pub const WEBHOOK_PATH: &str = "/api/tg/webhook";

/// Default setup route of the deployed function.
pub const SETUP_PATH: &str = "/api/tg/setup";

/// Default query parameter carrying the service key.
pub const KEY_PARAM: &str = "key";

/// Query parameter carrying the webhook secret.
pub const SECRET_PARAM: &str = "secret";

/// Comment attached to the variables written by `init`.
pub const ENV_COMMENT: &str = "Created and used by tgvercel";

/// Filter variable for log output.
pub const LOG_ENV: &str = "TGVERCEL_LOG";
