use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

/// Idempotent schema for the single `leads` table. `created_at` and
/// `status` carry defaults but are always bound explicitly on insert so
/// both storage backends produce identical values.
const CREATE_LEADS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS leads (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    company TEXT,
    app_name TEXT,
    budget TEXT,
    mau TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    status TEXT DEFAULT 'new'
)
"#;

pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    /// Opens (creating if missing) the SQLite database at `path` and
    /// ensures the schema exists. The containing directory is created
    /// first since SQLite will not do that itself.
    pub async fn new(path: &Path) -> anyhow::Result<Self> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(CREATE_LEADS_TABLE).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// In-memory database for tests. Pinned to a single connection:
    /// every SQLite `:memory:` connection is its own database, so a
    /// larger pool would scatter rows across invisible databases.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::new().in_memory(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        sqlx::query(CREATE_LEADS_TABLE).execute(&pool).await?;

        Ok(Self { pool })
    }
}
