use std::sync::Arc;

use anyhow::Context;
use chrono::Duration;
use tracing_subscriber::{EnvFilter, fmt};

use shift_requests::modules::identity::core::password::PasswordHashing;
use shift_requests::shared::infrastructure::gateway::Gateway;
use shift_requests::shared::infrastructure::gateway::sqlite::SqliteGateway;
use shift_requests::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use shift_requests::shell::config::{AppConfig, StorageMode};
use shift_requests::shell::http::{cors_layer, router};
use shift_requests::shell::seed::demo_gateway;
use shift_requests::shell::state::AppState;

const SQLITE_MAX_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let hashing = PasswordHashing::default();

    let gateway: Arc<dyn Gateway> = match config.storage_mode {
        StorageMode::Sqlite => Arc::new(
            SqliteGateway::connect(&config.database_url, SQLITE_MAX_CONNECTIONS)
                .await
                .context("failed to open the database")?,
        ),
        StorageMode::Memory => {
            tracing::warn!("running on volatile demo data");
            Arc::new(demo_gateway(&hashing).await?)
        }
    };

    let state = AppState::new(
        gateway,
        Arc::new(InMemorySessionStore::new()),
        hashing,
        Duration::seconds(config.session_ttl_seconds),
    );

    let mut app = router(state);
    if let Some(frontend_url) = &config.frontend_url {
        app = app.layer(cors_layer(frontend_url)?);
        tracing::info!(frontend_url, "cors enabled");
    }

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
