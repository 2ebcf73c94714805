pub mod domain;

// Re-exports for easy external access
pub use domain::entities::{ExternalEntry, MetadataMap, MetadataValue};
pub use domain::value_objects::RelationshipConstraint;
