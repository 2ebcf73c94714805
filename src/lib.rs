pub mod modules;
pub mod shared;

// Re-exports for the host application
pub use modules::entry_import::{
    CommitOutcome, EntryImportWorkflow, ImportChoice, ResolvedAction, WorkflowObserver,
};
