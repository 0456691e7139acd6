/// Store setup and initialization
///
/// Wires together the database pool, schema bootstrap and the three stores.

use crate::{
    association::AssociationStore,
    config::Config,
    database::Database,
    workflow::{ParameterStore, WorkflowStore},
};
use anyhow::{Context, Result};

/// The stores of one deployment, sharing a single pool
#[derive(Debug, Clone)]
pub struct Stores {
    pub database: Database,
    pub workflows: WorkflowStore,
    pub parameters: ParameterStore,
    pub associations: AssociationStore,
}

impl Stores {
    /// Build all stores over an already-initialized database
    pub fn new(database: Database) -> Self {
        Self {
            workflows: WorkflowStore::new(database.clone()),
            parameters: ParameterStore::new(database.clone()),
            associations: AssociationStore::new(database.clone()),
            database,
        }
    }
}

/// Connect to the configured database, make sure the schema exists and
/// return the wired stores.
pub async fn open_stores(config: &Config) -> Result<Stores> {
    tracing::info!("🗄️ Connecting to workflow database");
    let database = Database::connect(&config.database)
        .await
        .context("Failed to open workflow database")?;

    tracing::info!("📋 Ensuring workflow schema exists");
    database
        .init_schema()
        .await
        .context("Failed to initialize workflow schema")?;

    tracing::info!("✅ Workflow stores ready");
    Ok(Stores::new(database))
}
