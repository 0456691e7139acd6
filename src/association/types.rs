/// Association record types
///
/// An association binds an identity-management event to a workflow under a
/// textual condition. The condition is stored verbatim and never evaluated
/// here.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Association listing entry for administrative editing views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AssociationSummary {
    /// Store-generated association id
    pub id: i64,
    /// Event type the rule reacts to (e.g., "ADD_USER")
    pub event_id: String,
    pub condition: String,
    /// Association name
    pub name: String,
    /// Name of the bound workflow
    pub workflow_name: String,
}

/// A workflow that may have to handle an event
///
/// Returned to the event dispatcher, which evaluates `condition` and routes
/// the action through the workflow when it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct EventAssociation {
    pub condition: String,
    pub workflow_id: String,
    pub template_id: String,
    pub template_impl_id: String,
}
