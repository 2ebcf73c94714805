use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::modules::external_source::RelationshipConstraint;
use crate::modules::lookup::domain::remote_collection::RemoteCollection;
use crate::modules::lookup::domain::repositories::CandidateFetcher;
use crate::modules::lookup::domain::value_objects::PaginatedSearch;
use crate::{log_debug, log_info, log_warn};

/// Binding of one workflow to its single candidate fetch
///
/// Issues the fetch once on construction and publishes the terminal phase
/// into a shared slot the presentation layer reads. Dropping the binding
/// cancels a still-pending fetch so no task outlives a dismissed workflow.
pub struct CandidateBinding {
    phase: Arc<RwLock<RemoteCollection>>,
    cancel: CancellationToken,
}

impl CandidateBinding {
    /// Start the fetch; must be called within a tokio runtime
    pub fn start(
        fetcher: Arc<dyn CandidateFetcher>,
        constraint: RelationshipConstraint,
        search: PaginatedSearch,
    ) -> Self {
        if let Err(reason) = search.validate() {
            log_warn!("Candidate lookup started with invalid search: {}", reason);
        }
        if let Err(reason) = constraint.validate() {
            log_warn!("Candidate lookup started with invalid constraint: {}", reason);
        }

        let phase = Arc::new(RwLock::new(RemoteCollection::Pending));
        let cancel = CancellationToken::new();

        let published = Arc::clone(&phase);
        let token = cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    log_debug!("Candidate lookup for '{}' released before completion", search.query);
                }
                result = fetcher.local_candidates(&constraint, &search) => {
                    let terminal = match result {
                        Ok(page) => {
                            log_info!(
                                "Candidate lookup for '{}' returned {} of {} results",
                                search.query,
                                page.len(),
                                page.total_count
                            );
                            RemoteCollection::Ready(page)
                        }
                        Err(e) => {
                            log_warn!("Candidate lookup for '{}' failed: {}", search.query, e);
                            RemoteCollection::Failed {
                                reason: e.to_string(),
                            }
                        }
                    };
                    *published.write().await = terminal;
                }
            }
        });

        Self { phase, cancel }
    }

    /// Read-only snapshot of the current phase
    pub async fn snapshot(&self) -> RemoteCollection {
        self.phase.read().await.clone()
    }

    /// Release the fetch subscription; already-published results are unaffected
    pub fn release(&self) {
        self.cancel.cancel();
    }
}

impl Drop for CandidateBinding {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
