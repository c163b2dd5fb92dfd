use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::error::AppError;

pub type DbPool = SqlitePool;

/// Single source of database connections for the whole process.
///
/// Handlers never hold a connection across requests: every repository call
/// checks one out of the pool and returns it when the statement finishes.
#[derive(Clone)]
pub struct ConnectionProvider {
    pool: DbPool,
}

impl ConnectionProvider {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        info!(max_connections, "database pool ready");
        Ok(Self { pool })
    }

    /// One private in-memory database. The pool is pinned to a single
    /// connection that never expires, otherwise each new connection would
    /// see an empty database.
    pub async fn in_memory() -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn get_connection(&self) -> &DbPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("database pool closed");
    }
}

#[cfg(test)]
pub(crate) async fn test_pool() -> DbPool {
    let provider = ConnectionProvider::in_memory()
        .await
        .expect("in-memory database");
    provider.migrate().await.expect("migrations");
    provider.get_connection().clone()
}
