use serde::{Deserialize, Serialize};

use super::repositories::CandidatePage;

/// Phase of an asynchronously-fetched candidate collection
///
/// Exactly one phase holds at any observable instant. A collection starts
/// `Pending` and moves to `Ready` or `Failed` at most once; it is never
/// re-fetched within one workflow lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum RemoteCollection {
    /// Fetch has been issued but has not completed
    Pending,
    /// Fetch failed; the reason is surfaced unchanged to the host
    Failed { reason: String },
    /// Fetch completed with zero or more candidates
    Ready(CandidatePage),
}

impl RemoteCollection {
    pub fn is_pending(&self) -> bool {
        matches!(self, RemoteCollection::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RemoteCollection::Failed { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, RemoteCollection::Ready(_))
    }

    /// The candidate page if the fetch completed
    pub fn page(&self) -> Option<&CandidatePage> {
        match self {
            RemoteCollection::Ready(page) => Some(page),
            _ => None,
        }
    }
}
