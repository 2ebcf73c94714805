use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::RecordRef;

use super::choice::ImportChoice;

/// The single outcome artifact of a commit
///
/// The two producers are deliberately distinct: `ReuseLocal` is emitted to
/// the host through the workflow observer, while `ImportNew` is dispatched to
/// the entry importer as a side effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ResolvedAction {
    /// An existing local record substitutes the external entry
    ReuseLocal(RecordRef),
    /// The external entry is imported as a new record into a collection
    ImportNew {
        entry_id: String,
        collection_id: Uuid,
    },
}

/// What a commit dispatched, as seen by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// A local record was resolved and emitted to the observer
    Resolved(ResolvedAction),
    /// An import of the external entry was dispatched fire-and-forget
    ImportDispatched(ResolvedAction),
    /// The chosen kind has no import path wired up yet
    NotYetSupported(ImportChoice),
    /// No choice was active, or the active choice had an empty slot
    Nothing,
}
