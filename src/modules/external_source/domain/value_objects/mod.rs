mod relationship_constraint;

pub use relationship_constraint::*;
