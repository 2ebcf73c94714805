pub mod observer;
pub mod workflow;

pub use observer::WorkflowObserver;
pub use workflow::EntryImportWorkflow;
