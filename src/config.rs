// src/config.rs
//
// Runtime configuration
//
// Resolution order for the database file:
// 1. Explicit path (command line)
// 2. MEDIACATALOG_DB environment variable
// 3. {APP_DATA}/mediacatalog/catalog.db

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Environment variable overriding the database location
pub const DATABASE_ENV_VAR: &str = "MEDIACATALOG_DB";

/// Environment variable holding the log filter (env_logger syntax)
pub const LOG_ENV_VAR: &str = "MEDIACATALOG_LOG";

const APP_DIR_NAME: &str = "mediacatalog";
const DATABASE_FILE_NAME: &str = "catalog.db";

/// Reasonable for a single-user desktop tool
const DEFAULT_POOL_SIZE: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Maximum pooled connections
    pub pool_size: u32,
}

impl CatalogConfig {
    /// Resolve configuration from the command line and the process environment
    pub fn resolve(cli_database: Option<PathBuf>) -> AppResult<Self> {
        Self::from_sources(
            cli_database,
            std::env::var_os(DATABASE_ENV_VAR),
            dirs::data_dir(),
        )
    }

    /// Resolve configuration from explicit sources
    pub fn from_sources(
        cli_database: Option<PathBuf>,
        env_database: Option<OsString>,
        data_dir: Option<PathBuf>,
    ) -> AppResult<Self> {
        let database_path = match (cli_database, env_database) {
            (Some(path), _) => path,
            (None, Some(path)) if !path.is_empty() => PathBuf::from(path),
            _ => data_dir
                .ok_or_else(|| {
                    AppError::Other("Could not determine app data directory".to_string())
                })?
                .join(APP_DIR_NAME)
                .join(DATABASE_FILE_NAME),
        };

        Ok(Self {
            database_path,
            pool_size: DEFAULT_POOL_SIZE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_path_wins() {
        let config = CatalogConfig::from_sources(
            Some(PathBuf::from("/tmp/cli.db")),
            Some(OsString::from("/tmp/env.db")),
            Some(PathBuf::from("/data")),
        )
        .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/cli.db"));
    }

    #[test]
    fn test_env_path_used_without_cli() {
        let config = CatalogConfig::from_sources(
            None,
            Some(OsString::from("/tmp/env.db")),
            Some(PathBuf::from("/data")),
        )
        .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/env.db"));
    }

    #[test]
    fn test_empty_env_falls_back_to_data_dir() {
        let config =
            CatalogConfig::from_sources(None, Some(OsString::new()), Some(PathBuf::from("/data")))
                .unwrap();
        assert!(config.database_path.ends_with("mediacatalog/catalog.db"));
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
    }

    #[test]
    fn test_missing_data_dir_is_an_error() {
        assert!(CatalogConfig::from_sources(None, None, None).is_err());
    }
}
