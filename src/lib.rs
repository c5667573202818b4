pub mod api;
pub mod auth;
pub mod cli;
pub mod cookie;
pub mod db;
pub mod deps;
pub mod jwt;
pub mod password;

use axum::Router;
use cli::AppKind;
use db::Database;
use jwt::JwtConfig;
use password::PasswordError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct ServerConfig {
    /// Which demo application(s) to serve
    pub app: AppKind,
    /// Secret for signing access tokens (required when serving the login demo)
    pub jwt_secret: Option<Vec<u8>>,
    /// Lifetime of issued access tokens, in seconds
    pub token_duration_secs: u64,
}

/// Errors that prevent the application from being built.
#[derive(Debug)]
pub enum StartupError {
    /// The login demo was selected without a signing secret
    MissingSecret,
    /// Seeding the user store failed
    Password(PasswordError),
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::MissingSecret => write!(f, "A token signing secret is required"),
            StartupError::Password(e) => write!(f, "Failed to seed users: {}", e),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<PasswordError> for StartupError {
    fn from(e: PasswordError) -> Self {
        StartupError::Password(e)
    }
}

/// Create the application router with the given configuration.
pub fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    let db = Database::seeded()?;

    let token_router = || -> Result<Router, StartupError> {
        let secret = config
            .jwt_secret
            .as_deref()
            .ok_or(StartupError::MissingSecret)?;
        let jwt = Arc::new(JwtConfig::with_duration(secret, config.token_duration_secs));
        Ok(api::token_router(db.clone(), jwt))
    };

    let app = match config.app {
        AppKind::Params => api::params_router(db.clone()),
        AppKind::Cookie => api::last_query_router(),
        AppKind::Auth => token_router()?,
        AppKind::All => Router::new()
            .merge(api::params_router(db.clone()))
            .merge(api::last_query_router())
            .merge(token_router()?),
    };

    Ok(app)
}

/// Run the server on the given listener. This function blocks until the server exits.
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

/// Start the server on the given port in a background task. Use port 0 to let the OS choose a random port.
/// Returns the actual address the server is listening on.
/// Note: For production use, prefer `run_server` directly in main.
pub async fn start_server(
    config: ServerConfig,
    port: u16,
) -> Result<(tokio::task::JoinHandle<()>, SocketAddr), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_app(&config)?;

    let addr = format!("127.0.0.1:{}", port);
    let listener = TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = run_server(app, listener).await {
            tracing::error!(error = %e, "Server error");
        }
    });

    Ok((handle, local_addr))
}
