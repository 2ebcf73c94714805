pub mod remote_collection;
pub mod repositories;
pub mod value_objects;

pub use remote_collection::RemoteCollection;
pub use repositories::{CandidateFetcher, CandidateHit, CandidatePage};
pub use value_objects::PaginatedSearch;
