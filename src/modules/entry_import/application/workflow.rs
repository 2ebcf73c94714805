use std::sync::Arc;
use uuid::Uuid;

use crate::modules::catalog::{EntryImporter, RecordRef};
use crate::modules::external_source::{ExternalEntry, RelationshipConstraint};
use crate::modules::lookup::{CandidateBinding, CandidateFetcher, PaginatedSearch, RemoteCollection};
use crate::modules::selection::{ListId, SelectionStore};
use crate::shared::utils::TimedOperation;
use crate::{log_debug, log_error, log_info, log_warn};

use super::observer::WorkflowObserver;
use crate::modules::entry_import::domain::{CommitOutcome, ImportChoice, ResolvedAction};

/// List id for selecting local entities
pub const ENTITY_LIST_ID: &str = "external-source-import-entity";

/// List id for selecting local authorities
pub const AUTHORITY_LIST_ID: &str = "external-source-import-authority";

/// Exclusive-selection resolution workflow for one external entry
///
/// Coordinates two asynchronously-loaded candidate lists and two singleton
/// "create new" choices so at most one overall selection is active, then maps
/// the committed selection to exactly one resolved action.
///
/// State transitions are single-threaded: each event runs to completion on
/// `&mut self` before the next is accepted. The only suspending operation is
/// the one-shot candidate fetch held by the binding. Construction and commit
/// must happen within a tokio runtime.
pub struct EntryImportWorkflow {
    entry: ExternalEntry,
    collection_id: Uuid,
    choice: ImportChoice,
    selected_entity: Option<RecordRef>,
    selected_authority: Option<RecordRef>,
    entity_list: ListId,
    authority_list: ListId,
    candidates: CandidateBinding,
    store: Arc<dyn SelectionStore>,
    importer: Arc<dyn EntryImporter>,
    observer: Arc<dyn WorkflowObserver>,
}

impl EntryImportWorkflow {
    pub fn new(
        entry: ExternalEntry,
        constraint: RelationshipConstraint,
        collection_id: Uuid,
        fetcher: Arc<dyn CandidateFetcher>,
        store: Arc<dyn SelectionStore>,
        importer: Arc<dyn EntryImporter>,
        observer: Arc<dyn WorkflowObserver>,
    ) -> Self {
        let search = PaginatedSearch::for_entry_lookup(entry.value.clone());
        log_debug!(
            "Starting entry import workflow for '{}' from source '{}'",
            entry.value,
            entry.source
        );
        let candidates = CandidateBinding::start(fetcher, constraint, search);

        Self {
            entry,
            collection_id,
            choice: ImportChoice::None,
            selected_entity: None,
            selected_authority: None,
            entity_list: ListId::from(ENTITY_LIST_ID),
            authority_list: ListId::from(AUTHORITY_LIST_ID),
            candidates,
            store,
            importer,
            observer,
        }
    }

    pub fn choice(&self) -> ImportChoice {
        self.choice
    }

    pub fn selected_entity(&self) -> Option<&RecordRef> {
        self.selected_entity.as_ref()
    }

    pub fn selected_authority(&self) -> Option<&RecordRef> {
        self.selected_authority.as_ref()
    }

    pub fn entity_list(&self) -> &ListId {
        &self.entity_list
    }

    pub fn authority_list(&self) -> &ListId {
        &self.authority_list
    }

    /// Read-only snapshot of the candidate collection phase
    pub async fn candidates(&self) -> RemoteCollection {
        self.candidates.snapshot().await
    }

    /// A local entity was selected in the entity list
    ///
    /// Supersedes any other in-flight choice; the authority slot is emptied
    /// so the single state variable stays the only source of exclusivity.
    pub fn select_entity(&mut self, record: RecordRef) {
        self.store.select(&self.entity_list, record.clone());
        self.selected_authority = None;
        self.selected_entity = Some(record);
        self.choice = ImportChoice::LocalEntity;
    }

    /// The entity list selection was removed
    pub fn deselect_entity(&mut self) {
        self.selected_entity = None;
        if self.choice == ImportChoice::LocalEntity {
            self.choice = ImportChoice::None;
        }
    }

    /// A local authority was selected in the authority list
    pub fn select_authority(&mut self, record: RecordRef) {
        self.store.select(&self.authority_list, record.clone());
        self.selected_entity = None;
        self.selected_authority = Some(record);
        self.choice = ImportChoice::LocalAuthority;
    }

    /// The authority list selection was removed
    pub fn deselect_authority(&mut self) {
        self.selected_authority = None;
        if self.choice == ImportChoice::LocalAuthority {
            self.choice = ImportChoice::None;
        }
    }

    /// The "import as new entity" option was toggled
    pub fn toggle_new_entity(&mut self) {
        if self.choice == ImportChoice::NewEntity {
            self.choice = ImportChoice::None;
        } else {
            self.choice = ImportChoice::NewEntity;
            self.clear_list_selections();
        }
    }

    /// The "import as new authority" option was toggled
    pub fn toggle_new_authority(&mut self) {
        if self.choice == ImportChoice::NewAuthority {
            self.choice = ImportChoice::None;
        } else {
            self.choice = ImportChoice::NewAuthority;
            self.clear_list_selections();
        }
    }

    /// Finalize the active choice and dispatch its resolved action
    ///
    /// At most one resolved action is produced per call. Regardless of what
    /// was dispatched, the choice resets to `None`, both list selections are
    /// cleared and the close signal fires, so committing with no active
    /// choice is a safe no-op that still closes.
    pub fn commit(&mut self) -> CommitOutcome {
        let timer = TimedOperation::new("commit_import_choice");

        let outcome = match self.choice {
            ImportChoice::None => CommitOutcome::Nothing,
            ImportChoice::LocalEntity => match self.selected_entity.take() {
                Some(record) => {
                    log_info!(
                        "Resolved external entry '{}' to local entity {}",
                        self.entry.value,
                        record.id
                    );
                    let action = ResolvedAction::ReuseLocal(record);
                    self.observer.on_resolved(&action);
                    CommitOutcome::Resolved(action)
                }
                None => CommitOutcome::Nothing,
            },
            ImportChoice::NewEntity => {
                let action = ResolvedAction::ImportNew {
                    entry_id: self.entry.id.clone(),
                    collection_id: self.collection_id,
                };
                self.dispatch_import();
                CommitOutcome::ImportDispatched(action)
            }
            kind @ (ImportChoice::LocalAuthority | ImportChoice::NewAuthority) => {
                log_warn!(
                    "Authority import ({}) is not wired up yet; nothing dispatched",
                    kind
                );
                CommitOutcome::NotYetSupported(kind)
            }
        };

        self.reset();
        self.observer.on_close();
        timer.finish();
        outcome
    }

    /// Dismiss the workflow without dispatching anything
    pub fn cancel(&mut self) {
        self.reset();
        self.candidates.release();
        self.observer.on_close();
    }

    /// Fire-and-forget dispatch of the new-entity import
    ///
    /// Issued before the close signal; completion is not synchronized with
    /// it. A rejected import is logged but produces no state change and no
    /// host event.
    fn dispatch_import(&self) {
        let importer = Arc::clone(&self.importer);
        let entry = self.entry.clone();
        let collection_id = self.collection_id;
        tokio::spawn(async move {
            match importer.import_entry(&entry, collection_id).await {
                Ok(record) => log_info!(
                    "External entry '{}' imported as {} {}",
                    entry.value,
                    record.kind,
                    record.id
                ),
                Err(e) => log_error!("Import of external entry '{}' failed: {}", entry.value, e),
            }
        });
    }

    fn clear_list_selections(&mut self) {
        self.selected_entity = None;
        self.selected_authority = None;
        self.store.deselect_all(&self.entity_list);
        self.store.deselect_all(&self.authority_list);
    }

    fn reset(&mut self) {
        self.choice = ImportChoice::None;
        self.clear_list_selections();
    }
}
