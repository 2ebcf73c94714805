use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::catalog::domain::entities::RecordRef;
use crate::modules::external_source::ExternalEntry;
use crate::shared::errors::AppResult;

/// Repository interface for importing external source entries into the catalog
/// This defines the contract for creating a new local record from external data
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryImporter: Send + Sync {
    /// Create a new catalog record in the given collection from the external entry
    async fn import_entry(&self, entry: &ExternalEntry, collection_id: Uuid)
        -> AppResult<RecordRef>;
}
