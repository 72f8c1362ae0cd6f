use std::{future::Future, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::customer::{CustomerService, CustomerStore};
use service::storage::{JsonFileCustomerStore, MemoryCustomerStore, SeaOrmCustomerStore};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// `Access-Control-Allow-Origin: *` plus any method/header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::permissive()
}

/// Open the customer store selected by `[storage]`.
pub async fn build_store(cfg: &AppConfig) -> Result<Arc<dyn CustomerStore>, StartupError> {
    let store: Arc<dyn CustomerStore> = match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!("memory backend selected; records are lost on shutdown");
            Arc::new(MemoryCustomerStore::new())
        }
        StorageBackend::File => {
            let store = JsonFileCustomerStore::new(&cfg.storage.data_file)
                .await
                .map_err(|e| StartupError::Storage(e.to_string()))?;
            info!(data_file = %cfg.storage.data_file, "file backend ready");
            Arc::new(store)
        }
        StorageBackend::Database => {
            let db = models::db::connect(&cfg.database)
                .await
                .map_err(|e| StartupError::Storage(e.to_string()))?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Storage(format!("migration failed: {e}")))?;
            info!("database backend ready");
            Arc::new(SeaOrmCustomerStore::new(db))
        }
    };
    Ok(store)
}

/// Router wired to the given service with permissive CORS.
pub fn app(customers: CustomerService) -> Router {
    routes::build_router(ServerState::new(customers), build_cors())
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let store = build_store(&cfg).await?;
    let app = app(CustomerService::new(store));

    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, backend = ?cfg.storage.backend, "starting customer records server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}

/// Public entry: run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    serve(cfg, async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down");
        }
    })
    .await
}

/// Load `.env`, logging and configuration the way the binary does.
pub fn bootstrap() -> Result<AppConfig, StartupError> {
    dotenvy::dotenv().ok();
    init_logging_from_env();
    AppConfig::load().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_builds() -> anyhow::Result<()> {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        let store = build_store(&cfg).await?;
        assert!(store.scan().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn database_backend_runs_migrations() -> anyhow::Result<()> {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Database;
        cfg.database.url = "sqlite::memory:".into();
        cfg.database.max_connections = 1;
        let store = build_store(&cfg).await?;
        assert!(store.scan().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_database_is_a_storage_error() {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Database;
        cfg.database.url = "sqlite:///nonexistent-dir-for-tests/customers.db".into();
        cfg.database.connect_timeout_secs = 1;
        cfg.database.acquire_timeout_secs = 1;
        assert!(matches!(build_store(&cfg).await, Err(StartupError::Storage(_))));
    }
}
