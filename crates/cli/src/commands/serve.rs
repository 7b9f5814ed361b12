use std::path::Path;
use std::sync::Arc;

use axum::http::HeaderValue;
use rollbook_api::AppState;
use rollbook_core::config::{DatabaseDriver, RollbookConfig};
use rollbook_core::db::sqlite::SqliteRepository;
use rollbook_core::db::DatabasePool;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

/// Run the `serve` command: start the record API server.
pub async fn run(config_path: &str, port: Option<u16>) -> anyhow::Result<()> {
    let mut config = RollbookConfig::load(Path::new(config_path))?;
    config.apply_env_overrides()?;
    config.validate()?;

    let pool = match config.rollbook.database.driver {
        DatabaseDriver::Sqlite => {
            let path = config
                .rollbook
                .database
                .path
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("SQLite path not configured"))?;
            let connect_str = format!("sqlite:{}?mode=rwc", path);
            DatabasePool::new_sqlite(&connect_str).await?
        }
        DatabaseDriver::Postgres => {
            anyhow::bail!("PostgreSQL is not yet supported");
        }
    };

    let repo = match pool {
        DatabasePool::Sqlite(p) => SqliteRepository::new(p),
    };

    std::fs::create_dir_all(config.upload_dir())?;

    // CLI flag wins over config and the PORT environment override.
    let port = port.unwrap_or(config.server.port);

    let state = Arc::new(AppState { repo, config });
    let app = rollbook_api::router(state)
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;

    println!("Rollbook API listening on http://{}", addr);
    info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C handler");
    info!("Received shutdown signal");
}
