use serde::{Deserialize, Serialize};

use crate::modules::catalog::RecordRef;

/// Identifier of one selectable list within the shared selection store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(String);

impl ListId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ListId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Keyed registry of per-list selections, shared with sibling UI regions
///
/// The workflow only writes through to its own two list keys and never reads
/// the store back as its source of truth; concurrent writers to other keys
/// are outside its invariants.
pub trait SelectionStore: Send + Sync {
    /// Mark a record as selected in the given list
    fn select(&self, list: &ListId, record: RecordRef);

    /// Clear every selection of the given list
    fn deselect_all(&self, list: &ListId);

    /// Currently selected records of the given list
    fn selected(&self, list: &ListId) -> Vec<RecordRef>;
}
