pub mod domain;

// Re-exports for easy external access
pub use domain::entities::{RecordKind, RecordRef};
pub use domain::repositories::EntryImporter;
