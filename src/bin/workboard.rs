//! Workboard HTTP server.
//!
//! Configuration is read from the environment (see [`workboard::config`]).
//! With `DATABASE_URL` set the server applies the schema and serves from
//! `PostgreSQL`; otherwise it serves from an in-memory store that is lost on
//! exit. Users named in the credentials file are seeded into the store so
//! they can be assigned to tasks.

use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use workboard::api::{self, AppState};
use workboard::board::ports::BoardRepositoryError;
use workboard::config::{self, ConfigError, ServerConfig};
use workboard::identity::adapters::StaticTokenIdentityProvider;
use workboard::identity::ports::{UserDirectory, UserDirectoryError};
use workboard::store::WorkboardStore;
use workboard::store::memory::InMemoryStore;
use workboard::store::postgres::PostgresStore;
use workboard::telemetry::{self, TelemetryError};

/// Errors that stop the server.
#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to connect to PostgreSQL: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("failed to apply schema: {0}")]
    Schema(#[from] BoardRepositoryError),
    #[error("failed to seed users: {0}")]
    Seed(#[from] UserDirectoryError),
    #[error("connection task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let settings = ServerConfig::from_env()?;
    telemetry::init(settings.log_filter())?;

    let credentials = match settings.credentials_path() {
        Some(path) => config::load_credentials(path)?,
        None => {
            tracing::warn!("WORKBOARD_CREDENTIALS unset; every API request will be rejected");
            Vec::new()
        }
    };

    let store = open_store(&settings).await?;
    for credential in &credentials {
        store.upsert_user(&credential.user).await?;
    }
    let identity = StaticTokenIdentityProvider::new(&credentials);
    tracing::info!(tokens = identity.len(), "identity provider ready");

    let app = api::router(AppState::new(store, Arc::new(identity)));
    let listener = TcpListener::bind(settings.bind_address()).await?;
    tracing::info!(address = %settings.bind_address(), "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn open_store(settings: &ServerConfig) -> Result<Arc<dyn WorkboardStore>, ServerError> {
    let Some(url) = settings.database_url() else {
        tracing::info!("DATABASE_URL unset; using in-memory store");
        return Ok(Arc::new(InMemoryStore::new()));
    };

    let owned_url = url.to_owned();
    let pool_size = settings.pool_size();
    let store =
        tokio::task::spawn_blocking(move || PostgresStore::connect(&owned_url, pool_size)).await??;
    store.apply_schema().await?;
    tracing::info!(pool_size, "using PostgreSQL store");
    Ok(Arc::new(store))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
