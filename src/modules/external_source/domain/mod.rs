pub mod entities;
pub mod value_objects;

pub use entities::{ExternalEntry, MetadataMap, MetadataValue};
pub use value_objects::RelationshipConstraint;
