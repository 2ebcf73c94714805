pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{ListId, SelectionStore};
pub use infrastructure::InMemorySelectionStore;
