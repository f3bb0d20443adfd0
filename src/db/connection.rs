// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation
// - Thread-safe access

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::config::CatalogConfig;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;
     PRAGMA journal_mode = WAL;
     PRAGMA synchronous = NORMAL;
     PRAGMA busy_timeout = 5000;";

/// Create a connection pool for the configured database file
///
/// Every connection gets:
/// - Foreign keys enabled (child sets cascade on delete)
/// - WAL journal
/// - Busy timeout set to avoid immediate errors
pub fn create_connection_pool(config: &CatalogConfig) -> AppResult<ConnectionPool> {
    if let Some(dir) = config.database_path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let manager = SqliteConnectionManager::file(&config.database_path)
        .with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS));

    let pool = Pool::builder()
        .max_size(config.pool_size)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    log::debug!(
        "opened database {} (pool size {})",
        config.database_path.display(),
        config.pool_size
    );
    Ok(pool)
}

/// Create a pool over a private in-memory database
///
/// Each in-memory connection is its own database, so the pool is capped at
/// one connection. Intended for tests and throwaway sessions.
pub fn create_memory_pool() -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::memory()
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));

    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create memory pool: {}", e)))?;

    {
        let conn = pool.get()?;
        crate::db::initialize_database(&conn)?;
    }

    Ok(pool)
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory().map_err(AppError::Database)?;

    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(AppError::Database)?;

    Ok(conn)
}
