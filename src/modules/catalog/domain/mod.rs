pub mod entities;
pub mod repositories;

pub use entities::{RecordKind, RecordRef};
pub use repositories::EntryImporter;
