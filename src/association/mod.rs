/// Event association layer
///
/// Rules binding identity-management events to workflows, and the runtime
/// lookup the event dispatcher uses to decide whether an action needs approval.

pub mod storage;
pub mod types;

pub use storage::AssociationStore;
pub use types::{AssociationSummary, EventAssociation};
