//! CLI argument parsing, validation, and startup helpers.

use crate::ServerConfig;
use clap::Parser;
use tracing::error;

const MIN_SECRET_KEY_LENGTH: usize = 32;

#[derive(clap::ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
}

/// Which demo application to serve.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppKind {
    /// Path, query and body parameter binding
    Params,
    /// Query-or-cookie fallback dependency
    Cookie,
    /// Password login with bearer tokens
    Auth,
    /// All three on one listener
    #[default]
    All,
}

impl AppKind {
    /// Whether this selection serves the login demo and so needs a secret key.
    pub fn needs_secret(&self) -> bool {
        matches!(self, AppKind::Auth | AppKind::All)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "depdemo",
    about = "Request dependency and bearer token demo applications"
)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    pub port: u16,

    /// Demo application to serve
    #[arg(short, long, value_enum, default_value = "all")]
    pub app: AppKind,

    /// Path to file containing the token signing secret. Prefer using SECRET_KEY env var instead
    #[arg(long)]
    pub secret_key_file: Option<String>,

    /// Lifetime of issued access tokens, in minutes
    #[arg(long, env = "ACCESS_TOKEN_EXPIRE_MINUTES", default_value = "30",
        value_parser = clap::value_parser!(u64).range(1..))]
    pub token_expiry_minutes: u64,

    /// Log output format
    #[arg(short, long, default_value = "pretty")]
    pub log_format: LogFormat,
}

/// Initialize logging based on the specified format.
pub fn init_logging(format: &LogFormat) {
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt::init(),
        LogFormat::Json => tracing_subscriber::fmt().json().init(),
        LogFormat::Compact => tracing_subscriber::fmt().compact().init(),
    }
}

/// Load the token signing secret from the environment or a file.
/// Returns None and logs an error if the secret cannot be loaded.
pub fn load_secret_key(secret_key_file: Option<&str>) -> Option<String> {
    let secret = if let Ok(secret) = std::env::var("SECRET_KEY") {
        // Clear the environment variable to prevent leaking
        // SAFETY: We're single-threaded at this point during startup,
        // and no other code is reading this environment variable.
        unsafe { std::env::remove_var("SECRET_KEY") };
        secret
    } else if let Some(path) = secret_key_file {
        match std::fs::read_to_string(path) {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                error!(path = %path, error = %e, "Failed to read secret key file");
                return None;
            }
        }
    } else {
        error!(
            "Secret key is required. Set SECRET_KEY environment variable (recommended, .env is read) or use --secret-key-file"
        );
        return None;
    };

    validate_secret_key(secret)
}

fn validate_secret_key(secret: String) -> Option<String> {
    if secret.len() < MIN_SECRET_KEY_LENGTH {
        error!(
            "Secret key is shorter than {} characters. Use a longer secret",
            MIN_SECRET_KEY_LENGTH
        );
        return None;
    }

    Some(secret)
}

/// Build ServerConfig from validated arguments.
pub fn build_config(app: AppKind, secret_key: Option<String>, token_expiry_minutes: u64) -> ServerConfig {
    ServerConfig {
        app,
        jwt_secret: secret_key.map(String::into_bytes),
        token_duration_secs: token_expiry_minutes * 60,
    }
}
