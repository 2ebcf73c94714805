use dashmap::DashMap;

use crate::modules::catalog::RecordRef;
use crate::modules::selection::domain::{ListId, SelectionStore};

/// In-memory selection store backed by a concurrent keyed map
///
/// Lists are created lazily on first select; deselecting all of an unknown
/// list is a no-op.
#[derive(Debug, Default)]
pub struct InMemorySelectionStore {
    lists: DashMap<ListId, Vec<RecordRef>>,
}

impl InMemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for InMemorySelectionStore {
    fn select(&self, list: &ListId, record: RecordRef) {
        let mut entries = self.lists.entry(list.clone()).or_default();
        if !entries.iter().any(|existing| existing.id == record.id) {
            entries.push(record);
        }
    }

    fn deselect_all(&self, list: &ListId) {
        self.lists.remove(list);
    }

    fn selected(&self, list: &ListId) -> Vec<RecordRef> {
        self.lists
            .get(list)
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_idempotent_per_record() {
        let store = InMemorySelectionStore::new();
        let list = ListId::from("entity-list");
        let record = RecordRef::entity("Jane Doe");

        store.select(&list, record.clone());
        store.select(&list, record.clone());

        assert_eq!(store.selected(&list), vec![record]);
    }

    #[test]
    fn test_deselect_all_only_touches_its_list() {
        let store = InMemorySelectionStore::new();
        let entities = ListId::from("entity-list");
        let authorities = ListId::from("authority-list");

        store.select(&entities, RecordRef::entity("Jane Doe"));
        store.select(&authorities, RecordRef::authority("Doe, Jane"));

        store.deselect_all(&entities);

        assert!(store.selected(&entities).is_empty());
        assert_eq!(store.selected(&authorities).len(), 1);
    }

    #[test]
    fn test_deselect_all_on_unknown_list_is_noop() {
        let store = InMemorySelectionStore::new();
        store.deselect_all(&ListId::from("missing"));
        assert!(store.selected(&ListId::from("missing")).is_empty());
    }
}
