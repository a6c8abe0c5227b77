use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Fixed SQLite data directory used when running in production mode.
const PROD_DATA_DIR: &str = "/var/www/amplera/data";

/// Name of the SQLite database file inside the data directory.
const DB_FILE_NAME: &str = "amplera.db";

/// Deployment-time runtime mode. Only affects where the durable store
/// keeps its database file, never which backend is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Production,
    Development,
}

impl FromStr for RuntimeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "production" => Ok(RuntimeMode::Production),
            "development" => Ok(RuntimeMode::Development),
            other => anyhow::bail!("APP_ENV must be 'production' or 'development', got '{other}'"),
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeMode::Production => write!(f, "production"),
            RuntimeMode::Development => write!(f, "development"),
        }
    }
}

/// Which lead store implementation to construct at startup.
///
/// Selected explicitly via `STORAGE_BACKEND` rather than inferred from the
/// runtime mode, so swapping backends is a deliberate configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Durable, file-backed SQLite store.
    Sqlite,
    /// Process-lifetime in-memory store, lost on restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => anyhow::bail!("STORAGE_BACKEND must be 'sqlite' or 'memory', got '{other}'"),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Sqlite => write!(f, "sqlite"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub mode: RuntimeMode,
    pub storage_backend: StorageBackend,
    /// Optional override for the SQLite data directory.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            mode: std::env::var("APP_ENV")
                .unwrap_or_else(|_| "development".to_string())
                .parse()?,
            storage_backend: std::env::var("STORAGE_BACKEND")
                .unwrap_or_else(|_| "sqlite".to_string())
                .parse()?,
            data_dir: std::env::var("DATA_DIR")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        };

        tracing::debug!("Runtime mode: {:?}", config.mode);
        tracing::debug!("Storage backend: {:?}", config.storage_backend);
        tracing::debug!("Server port: {}", config.port);

        Ok(config)
    }

    /// Resolves the SQLite database file path, once per process.
    ///
    /// Priority: explicit `DATA_DIR` override, then the fixed operational
    /// root in production mode, then a project-local `data/` directory.
    pub fn database_path(&self) -> PathBuf {
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => match self.mode {
                RuntimeMode::Production => PathBuf::from(PROD_DATA_DIR),
                RuntimeMode::Development => PathBuf::from("data"),
            },
        };
        dir.join(DB_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(mode: RuntimeMode, data_dir: Option<&str>) -> Config {
        Config {
            port: 3000,
            mode,
            storage_backend: StorageBackend::Sqlite,
            data_dir: data_dir.map(PathBuf::from),
        }
    }

    #[test]
    fn production_mode_uses_operational_root() {
        let config = test_config(RuntimeMode::Production, None);
        assert_eq!(
            config.database_path(),
            PathBuf::from("/var/www/amplera/data/amplera.db")
        );
    }

    #[test]
    fn development_mode_uses_project_local_path() {
        let config = test_config(RuntimeMode::Development, None);
        assert_eq!(config.database_path(), PathBuf::from("data/amplera.db"));
    }

    #[test]
    fn data_dir_override_wins_in_any_mode() {
        let config = test_config(RuntimeMode::Production, Some("/tmp/leads"));
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/leads/amplera.db")
        );
    }

    #[test]
    fn backend_and_mode_parse_from_strings() {
        assert_eq!(
            "memory".parse::<StorageBackend>().unwrap(),
            StorageBackend::Memory
        );
        assert_eq!(
            "production".parse::<RuntimeMode>().unwrap(),
            RuntimeMode::Production
        );
        assert!("postgres".parse::<StorageBackend>().is_err());
        assert!("staging".parse::<RuntimeMode>().is_err());
    }
}
