/// Connection provider for the workflow association tables
///
/// Wraps a single SQLite pool and hands out scoped connections and
/// transactions. Every store goes through [`Database::acquire`] for reads and
/// [`Database::begin`] / [`Database::commit`] for writes; dropping either
/// handle returns the connection to the pool, and a dropped uncommitted
/// transaction is rolled back.

pub mod schema;

use crate::{
    config::DatabaseConfig,
    error::{Result, StorageError},
};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Sqlite, Transaction,
};
use std::str::FromStr;

/// Shared handle to the relational store
#[derive(Debug, Clone)]
pub struct Database {
    /// SQLite connection pool
    pool: SqlitePool,
}

impl Database {
    /// Open a pool for the configured database URL
    ///
    /// Creates the database file when missing and turns on foreign key
    /// enforcement for every pooled connection.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(StorageError::connection)?
            .create_if_missing(true)
            .foreign_keys(true);

        tracing::info!(
            "Opening workflow database pool: {} (max_connections={})",
            config.url,
            config.max_connections
        );

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(StorageError::connection)?;

        Ok(Self { pool })
    }

    /// Wrap a pool owned by the embedding application
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Borrow the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the workflow, parameter and association tables
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn init_schema(&self) -> Result<()> {
        let mut tx = self.begin().await?;
        for statement in schema::SCHEMA {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::query)?;
        }
        Self::commit(tx).await?;

        tracing::debug!("Workflow schema ready ({} statements)", schema::SCHEMA.len());
        Ok(())
    }

    /// Check out a single connection for a read
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>> {
        self.pool.acquire().await.map_err(StorageError::connection)
    }

    /// Start a write transaction
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>> {
        self.pool.begin().await.map_err(StorageError::connection)
    }

    /// Commit a write transaction, releasing its connection
    pub async fn commit(tx: Transaction<'static, Sqlite>) -> Result<()> {
        tx.commit().await.map_err(StorageError::query)
    }
}
