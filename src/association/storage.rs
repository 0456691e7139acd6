/// SQLite persistence for event -> workflow associations
///
/// Administrative operations (create, remove, listings) plus the
/// tenant-scoped lookup the event dispatcher runs on every event.

use crate::{
    association::types::{AssociationSummary, EventAssociation},
    database::Database,
    error::{Result, StorageError},
};

// Shared projection for administrative listings
const SUMMARY_SELECT: &str = r#"
    SELECT a.id AS id,
           a.event_id AS event_id,
           a.assoc_condition AS condition,
           a.name AS name,
           w.name AS workflow_name
    FROM workflow_associations a
    JOIN workflows w ON w.id = a.workflow_id
"#;

/// Association store
#[derive(Debug, Clone)]
pub struct AssociationStore {
    db: Database,
}

impl AssociationStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Bind an event to a workflow under a condition
    ///
    /// Returns the generated association id.
    pub async fn create(
        &self,
        name: &str,
        workflow_id: &str,
        event_id: &str,
        condition: &str,
    ) -> Result<i64> {
        let mut tx = self.db.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO workflow_associations (event_id, name, assoc_condition, workflow_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(event_id)
        .bind(name)
        .bind(condition)
        .bind(workflow_id)
        .execute(&mut *tx)
        .await
        .map_err(StorageError::query)?;

        Database::commit(tx).await?;

        let id = result.last_insert_rowid();
        tracing::debug!("Associated event {} with workflow {} (id={})", event_id, workflow_id, id);
        Ok(id)
    }

    /// Delete an association by id
    ///
    /// Deleting an unknown id is a no-op.
    pub async fn remove(&self, id: i64) -> Result<()> {
        let mut tx = self.db.begin().await?;

        let result = sqlx::query("DELETE FROM workflow_associations WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::query)?;

        Database::commit(tx).await?;

        tracing::debug!("Removed association {} ({} rows)", id, result.rows_affected());
        Ok(())
    }

    /// All associations bound to one workflow
    pub async fn list_for_workflow(&self, workflow_id: &str) -> Result<Vec<AssociationSummary>> {
        let mut conn = self.db.acquire().await?;
        let query = format!("{SUMMARY_SELECT} WHERE a.workflow_id = ? ORDER BY a.id");

        sqlx::query_as(&query)
            .bind(workflow_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(StorageError::query)
    }

    /// All associations of every tenant
    ///
    /// Not tenant-scoped: callers exposing this outside an administrator
    /// context must filter the result themselves.
    pub async fn list_all(&self) -> Result<Vec<AssociationSummary>> {
        let mut conn = self.db.acquire().await?;
        let query = format!("{SUMMARY_SELECT} ORDER BY a.id");

        sqlx::query_as(&query)
            .fetch_all(&mut *conn)
            .await
            .map_err(StorageError::query)
    }

    /// Workflows that may have to handle `event_id` for `tenant_id`
    ///
    /// Only associations whose owning workflow belongs to the tenant are
    /// returned.
    pub async fn resolve_for_event(
        &self,
        event_id: &str,
        tenant_id: i32,
    ) -> Result<Vec<EventAssociation>> {
        let mut conn = self.db.acquire().await?;

        let associations: Vec<EventAssociation> = sqlx::query_as(
            r#"
            SELECT a.assoc_condition AS condition,
                   a.workflow_id AS workflow_id,
                   w.template_id AS template_id,
                   w.template_impl_id AS template_impl_id
            FROM workflow_associations a
            JOIN workflows w ON w.id = a.workflow_id
            WHERE a.event_id = ? AND w.tenant_id = ?
            ORDER BY a.id
            "#,
        )
        .bind(event_id)
        .bind(tenant_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(StorageError::query)?;

        tracing::debug!(
            "Resolved {} associations for event {} (tenant {})",
            associations.len(),
            event_id,
            tenant_id
        );
        Ok(associations)
    }
}
