#![allow(dead_code)]

use std::path::PathBuf;

use uuid::Uuid;
use workflow_assoc::{config::DatabaseConfig, Database, Stores, Workflow};

/// Fresh stores over a throwaway SQLite file with the schema in place
pub async fn test_stores() -> Stores {
    let path: PathBuf = std::env::temp_dir().join(format!("workflow_assoc_{}.db", Uuid::new_v4()));
    let config = DatabaseConfig {
        url: format!("sqlite://{}", path.display()),
        max_connections: 2,
    };

    let database = Database::connect(&config)
        .await
        .expect("Failed to open test DB");
    database
        .init_schema()
        .await
        .expect("Failed to create schema");

    Stores::new(database)
}

pub fn workflow(id: &str, tenant_id: i32) -> Workflow {
    Workflow {
        id: id.to_string(),
        name: format!("{id} name"),
        description: format!("{id} description"),
        template_id: "tpl-1".to_string(),
        template_impl_id: "impl-1".to_string(),
        tenant_id,
    }
}
