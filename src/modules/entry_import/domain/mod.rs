pub mod choice;
pub mod resolved_action;

pub use choice::ImportChoice;
pub use resolved_action::{CommitOutcome, ResolvedAction};
