/// Hand-rolled collaborator fakes for end-to-end workflow tests
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

use entrylink::modules::catalog::{EntryImporter, RecordRef};
use entrylink::modules::external_source::{ExternalEntry, RelationshipConstraint};
use entrylink::modules::lookup::{CandidateFetcher, CandidatePage, PaginatedSearch};
use entrylink::shared::errors::{AppError, AppResult};
use entrylink::{ResolvedAction, WorkflowObserver};

/// Fetcher that resolves to a fixed outcome after an optional delay
pub struct FakeFetcher {
    outcome: Result<CandidatePage, String>,
    delay: Duration,
    pub queries: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn ready(page: CandidatePage) -> Self {
        Self {
            outcome: Ok(page),
            delay: Duration::ZERO,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(reason.to_string()),
            delay: Duration::ZERO,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl CandidateFetcher for FakeFetcher {
    async fn local_candidates(
        &self,
        _constraint: &RelationshipConstraint,
        search: &PaginatedSearch,
    ) -> AppResult<CandidatePage> {
        self.queries.lock().unwrap().push(search.query.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.outcome {
            Ok(page) => Ok(page.clone()),
            Err(reason) => Err(AppError::ExternalServiceError(reason.clone())),
        }
    }
}

/// Importer recording each dispatch; optionally rejects every entry
pub struct FakeImporter {
    pub calls: Mutex<Vec<(String, Uuid)>>,
    reject: Option<String>,
}

impl FakeImporter {
    pub fn accepting() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject: None,
        }
    }

    pub fn rejecting(reason: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject: Some(reason.to_string()),
        }
    }
}

#[async_trait]
impl EntryImporter for FakeImporter {
    async fn import_entry(
        &self,
        entry: &ExternalEntry,
        collection_id: Uuid,
    ) -> AppResult<RecordRef> {
        self.calls
            .lock()
            .unwrap()
            .push((entry.id.clone(), collection_id));
        match &self.reject {
            Some(reason) => Err(AppError::ExternalServiceError(reason.clone())),
            None => Ok(RecordRef::entity(entry.value.clone())),
        }
    }
}

/// Host observer recording resolved actions and close signals
#[derive(Default)]
pub struct RecordingHost {
    pub resolved: Mutex<Vec<ResolvedAction>>,
    pub closes: AtomicUsize,
}

impl RecordingHost {
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl WorkflowObserver for RecordingHost {
    fn on_resolved(&self, action: &ResolvedAction) {
        self.resolved.lock().unwrap().push(action.clone());
    }

    fn on_close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Poll until the importer has recorded at least `count` dispatches
pub async fn wait_for_dispatches(importer: &Arc<FakeImporter>, count: usize) {
    for _ in 0..50 {
        if importer.calls.lock().unwrap().len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
