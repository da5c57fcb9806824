//! Connection handle shared by every repository.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::AppError;

/// Owns the single store connection for the lifetime of the process.
///
/// The pool is capped at one connection, so statements from different
/// repositories are serialized on it. Callers are expected to issue one
/// operation at a time; the fetch-then-write update in the services is not
/// protected against a second caller interleaving between its two phases.
#[derive(Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// Opens the store at `url` (e.g. `sqlite://catalog.db`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the URL is malformed or the file
    /// cannot be opened.
    pub async fn connect(url: &str, create_if_missing: bool) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(create_if_missing);
        Self::open(options).await
    }

    /// Opens a private in-memory store. Data lives as long as the handle.
    pub async fn in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        Self::open(options).await
    }

    async fn open(options: SqliteConnectOptions) -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        tracing::debug!("Opened catalog store");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(self.pool.as_ref())
            .await?;
        tracing::debug!("Catalog schema is up to date");
        Ok(())
    }

    /// Round-trips a trivial statement to confirm the store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }

    pub fn pool(&self) -> Arc<SqlitePool> {
        self.pool.clone()
    }
}
