/// Workflow Management Layer
///
/// This module handles workflow definitions and their configuration:
/// - Type definitions (Workflow, WorkflowSummary)
/// - SQLite persistence for definitions and parameters
/// - Template registry seam with a lock-free in-memory catalog

// Core workflow type definitions
pub mod types;

// SQLite persistence for workflow definitions
pub mod storage;

// Opaque string parameters per workflow
pub mod parameters;

// Template display metadata lookups
pub mod registry;

// Re-export commonly used types
pub use parameters::ParameterStore;
pub use registry::{TemplateCatalog, TemplateRegistry};
pub use storage::WorkflowStore;
pub use types::{Workflow, WorkflowSummary};
