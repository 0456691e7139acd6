/// Table definitions for workflows, their parameters and event associations
///
/// Dependants reference `workflows(id)` with ON DELETE CASCADE; the stores
/// themselves never delete dependant rows.

pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS workflows (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        template_id TEXT NOT NULL,
        template_impl_id TEXT NOT NULL,
        tenant_id INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS workflow_params (
        workflow_id TEXT NOT NULL REFERENCES workflows(id) ON DELETE CASCADE,
        name TEXT NOT NULL,
        value TEXT NOT NULL,
        PRIMARY KEY (workflow_id, name)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS workflow_associations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        workflow_id TEXT NOT NULL REFERENCES workflows(id) ON DELETE CASCADE,
        event_id TEXT NOT NULL,
        assoc_condition TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_workflows_tenant ON workflows(tenant_id)",
    // resolve_for_event filters on event first, then joins to the tenant
    "CREATE INDEX IF NOT EXISTS idx_associations_event ON workflow_associations(event_id)",
    "CREATE INDEX IF NOT EXISTS idx_associations_workflow ON workflow_associations(workflow_id)",
];
