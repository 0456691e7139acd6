/// Workflow record types
///
/// `Workflow` mirrors one row of the workflows table. `WorkflowSummary` is the
/// listing shape, enriched with display names from the template registry.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered workflow definition owned by a tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Workflow {
    /// Caller-supplied workflow identifier (e.g., "wf-leave")
    pub id: String,
    /// Human-readable workflow name
    pub name: String,
    pub description: String,
    /// Template this workflow instantiates
    pub template_id: String,
    /// Concrete engine realising the template
    pub template_impl_id: String,
    /// Owning tenant
    pub tenant_id: i32,
}

/// Workflow listing entry for administrative views
///
/// `template_name` and `implementation_name` are empty when the registry
/// cannot resolve them (e.g., the template plugin is not deployed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub template_id: String,
    pub template_impl_id: String,
    pub template_name: String,
    pub implementation_name: String,
}
