/// Workflow association store
///
/// Persistence layer for workflow definitions, their configuration
/// parameters, and the rules that bind identity-management events to
/// workflows, with the tenant-scoped lookup used by the event dispatcher.

// Core configuration and setup
pub mod config;

// Storage error shared by every store
pub mod error;

// Connection provider and schema bootstrap
pub mod database;

// Workflow definitions, parameters and template registry
pub mod workflow;

// Event -> workflow association rules
pub mod association;

// Store wiring
pub mod bootstrap;

// Re-export commonly used types for external consumers
pub use association::{AssociationStore, AssociationSummary, EventAssociation};
pub use bootstrap::{open_stores, Stores};
pub use database::Database;
pub use error::{Result, StorageError};
pub use workflow::{
    ParameterStore, TemplateCatalog, TemplateRegistry, Workflow, WorkflowStore, WorkflowSummary,
};
