/// Opaque string parameters attached to a workflow
///
/// Values are stored and returned verbatim; no typing is applied.

use crate::{
    database::Database,
    error::{Result, StorageError},
};
use sqlx::Row;
use std::collections::HashMap;

/// Workflow parameter store
#[derive(Debug, Clone)]
pub struct ParameterStore {
    db: Database,
}

impl ParameterStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a batch of parameters for one workflow
    ///
    /// All inserts share one transaction and commit together. If any insert
    /// fails, the transaction is dropped uncommitted and none of the batch is
    /// kept.
    pub async fn set_all<I, K, V>(&self, workflow_id: &str, params: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut tx = self.db.begin().await?;
        let mut count = 0usize;

        for (name, value) in params {
            sqlx::query("INSERT INTO workflow_params (workflow_id, name, value) VALUES (?, ?, ?)")
                .bind(workflow_id)
                .bind(name.as_ref())
                .bind(value.as_ref())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::query)?;
            count += 1;
        }

        Database::commit(tx).await?;

        tracing::debug!("Stored {} parameters for workflow {}", count, workflow_id);
        Ok(())
    }

    /// Read all parameters of a workflow as name -> value
    ///
    /// Rows with a blank name are skipped.
    pub async fn get_all(&self, workflow_id: &str) -> Result<HashMap<String, String>> {
        let mut conn = self.db.acquire().await?;

        let rows = sqlx::query("SELECT name, value FROM workflow_params WHERE workflow_id = ?")
            .bind(workflow_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(StorageError::query)?;

        let mut params = HashMap::with_capacity(rows.len());
        for row in rows {
            let name: String = row.try_get("name").map_err(StorageError::query)?;
            if name.trim().is_empty() {
                continue;
            }
            let value: String = row.try_get("value").map_err(StorageError::query)?;
            params.insert(name, value);
        }

        Ok(params)
    }
}
