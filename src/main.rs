use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use amplera_leads::config::{Config, StorageBackend};
use amplera_leads::db::Database;
use amplera_leads::handlers::{self, AppState};
use amplera_leads::memory_store::MemoryLeadStore;
use amplera_leads::sqlite_store::SqliteLeadStore;
use amplera_leads::store::LeadStore;

/// Main entry point for the application.
///
/// Initializes tracing, loads configuration, constructs the configured
/// storage backend, and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "amplera_leads=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Construct the storage backend selected by configuration. The choice
    // is made exactly once, here; handlers only ever see the trait object.
    let store: Arc<dyn LeadStore> = match config.storage_backend {
        StorageBackend::Sqlite => {
            let path = config.database_path();
            let db = Database::new(&path).await?;
            tracing::info!("SQLite lead store ready at {}", path.display());
            Arc::new(SqliteLeadStore::new(db.pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("In-memory lead store selected; leads will not survive restarts");
            Arc::new(MemoryLeadStore::new())
        }
    };

    // Build application state and router
    let app_state = Arc::new(AppState {
        store,
        config: config.clone(),
    });
    let app = handlers::app(app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
