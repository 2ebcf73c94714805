pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::observer::WorkflowObserver;
pub use application::workflow::{EntryImportWorkflow, AUTHORITY_LIST_ID, ENTITY_LIST_ID};
pub use domain::{CommitOutcome, ImportChoice, ResolvedAction};
