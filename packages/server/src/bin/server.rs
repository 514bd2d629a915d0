//! Site Catalog API server

use anyhow::{Context, Result};
use site_catalog::{server::build_app, Config};
use sqlx::mysql::MySqlPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first: DEBUG decides the default log level
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Site Catalog API");
    tracing::info!(
        db_host = %config.db_host,
        db_port = config.db_port,
        db_name = %config.db_name,
        db_user = %config.db_user,
        ssl_disabled = config.db_ssl_disabled,
        debug = config.debug,
        "Configuration loaded"
    );

    // Lazy pool: connections open on first use, so /health answers even
    // while the store is unreachable
    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect_lazy_with(config.connect_options());

    let app = build_app(pool);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Website lookup: http://localhost:{}/api?name=example.com", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
