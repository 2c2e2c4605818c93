use anyhow::Context;
use clap::Parser;

use apikey_auth::model::arg::Args;
use apikey_auth::model::config::Config;
use apikey_auth::server;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let mut config = Config::load(&config_path).unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {:#}", e);
        std::process::exit(1);
    });
    config.apply_args(&args);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let app = server::create_router(&config);

    let addr = config.listen_addr();
    tracing::info!("Starting API key endpoint: {}", addr);
    if let Some(path) = config.config_path() {
        tracing::info!("Config file: {}", path.display());
    }
    tracing::info!("CORS enabled: {}", config.cors_enabled);
    tracing::info!("Available APIs:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /v1/whoami  (Authorization: ApiKey <token>)");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
