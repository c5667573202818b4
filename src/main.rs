use clap::Parser;
use depdemo::cli::{Args, build_config, init_logging, load_secret_key};
use depdemo::{create_app, run_server};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    init_logging(&args.log_format);

    let secret_key = if args.app.needs_secret() {
        let Some(secret) = load_secret_key(args.secret_key_file.as_deref()) else {
            std::process::exit(1);
        };
        Some(secret)
    } else {
        None
    };

    let config = build_config(args.app, secret_key, args.token_expiry_minutes);
    let app = create_app(&config).unwrap_or_else(|e| {
        error!(error = %e, "Failed to build application");
        std::process::exit(1);
    });

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!(address = %addr, error = %e, "Failed to bind");
            std::process::exit(1);
        });

    match listener.local_addr() {
        Ok(local_addr) => info!(address = %local_addr, app = ?args.app, "Listening"),
        Err(e) => error!(error = %e, "Failed to read local address"),
    }

    if let Err(e) = run_server(app, listener).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
