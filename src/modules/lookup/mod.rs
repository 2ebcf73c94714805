pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::CandidateBinding;
pub use domain::remote_collection::RemoteCollection;
pub use domain::repositories::{CandidateFetcher, CandidateHit, CandidatePage};
pub use domain::value_objects::PaginatedSearch;
