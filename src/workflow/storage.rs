/// SQLite persistence for workflow definitions
///
/// Handles create, delete and tenant-scoped listing of workflows. Listings are
/// enriched with template display names from an injected registry.

use crate::{
    database::Database,
    error::{Result, StorageError},
    workflow::{
        registry::TemplateRegistry,
        types::{Workflow, WorkflowSummary},
    },
};

/// Workflow definition store
#[derive(Debug, Clone)]
pub struct WorkflowStore {
    db: Database,
}

impl WorkflowStore {
    /// Create new store instance over a shared database handle
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a new workflow definition
    ///
    /// The caller supplies the id. A duplicate id surfaces as a storage error
    /// from the primary key constraint.
    pub async fn create(&self, workflow: &Workflow) -> Result<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO workflows (id, name, description, template_id, template_impl_id, tenant_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&workflow.id)
        .bind(&workflow.name)
        .bind(&workflow.description)
        .bind(&workflow.template_id)
        .bind(&workflow.template_impl_id)
        .bind(workflow.tenant_id)
        .execute(&mut *tx)
        .await
        .map_err(StorageError::query)?;

        Database::commit(tx).await?;

        tracing::debug!("Created workflow {} for tenant {}", workflow.id, workflow.tenant_id);
        Ok(())
    }

    /// Delete a workflow by ID
    ///
    /// Deleting an unknown id is a no-op.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let mut tx = self.db.begin().await?;

        let result = sqlx::query("DELETE FROM workflows WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::query)?;

        Database::commit(tx).await?;

        tracing::debug!("Removed workflow {} ({} rows)", id, result.rows_affected());
        Ok(())
    }

    /// List all workflows of a tenant with template display names
    ///
    /// Unresolvable template or implementation names come back as empty
    /// strings rather than failing the listing. Each name is blanked on its
    /// own: a known template with an unknown implementation keeps its
    /// template name and only loses the implementation name.
    pub async fn list<R>(&self, tenant_id: i32, registry: &R) -> Result<Vec<WorkflowSummary>>
    where
        R: TemplateRegistry + ?Sized,
    {
        let mut conn = self.db.acquire().await?;

        let rows: Vec<Workflow> = sqlx::query_as(
            r#"
            SELECT id, name, description, template_id, template_impl_id, tenant_id
            FROM workflows
            WHERE tenant_id = ?
            ORDER BY id
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(StorageError::query)?;

        let workflows = rows
            .into_iter()
            .map(|row| summarize(row, registry))
            .collect::<Vec<_>>();

        tracing::debug!("Listed {} workflows for tenant {}", workflows.len(), tenant_id);
        Ok(workflows)
    }
}

fn summarize<R>(row: Workflow, registry: &R) -> WorkflowSummary
where
    R: TemplateRegistry + ?Sized,
{
    let template_name = registry.template_name(&row.template_id);
    let implementation_name = registry.implementation_name(&row.template_id, &row.template_impl_id);

    if template_name.is_none() || implementation_name.is_none() {
        tracing::warn!(
            "Workflow {} references unresolved template {}/{}",
            row.id,
            row.template_id,
            row.template_impl_id
        );
    }

    WorkflowSummary {
        id: row.id,
        name: row.name,
        description: row.description,
        template_id: row.template_id,
        template_impl_id: row.template_impl_id,
        template_name: template_name.unwrap_or_default(),
        implementation_name: implementation_name.unwrap_or_default(),
    }
}
