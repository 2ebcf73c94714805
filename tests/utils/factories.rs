/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use entrylink::modules::catalog::{RecordKind, RecordRef};
use entrylink::modules::external_source::domain::entities::URI_FIELD;
use entrylink::modules::external_source::{ExternalEntry, MetadataValue, RelationshipConstraint};
use entrylink::modules::lookup::{CandidateHit, CandidatePage};
use entrylink::shared::application::{PaginatedResult, PaginationParams};
use uuid::Uuid;

pub struct EntryFactory {
    id: String,
    source: String,
    value: String,
    uri: Option<String>,
}

impl Default for EntryFactory {
    fn default() -> Self {
        Self {
            id: "entry-0001".to_string(),
            source: "orcid".to_string(),
            value: "Jane Doe".to_string(),
            uri: Some("https://orcid.org/0000-0001".to_string()),
        }
    }
}

impl EntryFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn without_uri(mut self) -> Self {
        self.uri = None;
        self
    }

    pub fn build(self) -> ExternalEntry {
        let mut entry = ExternalEntry::new(self.id, self.source, self.value);
        if let Some(uri) = self.uri {
            entry = entry.with_metadata(URI_FIELD, MetadataValue::new(uri));
        }
        entry
    }
}

pub fn person_constraint() -> RelationshipConstraint {
    RelationshipConstraint::new("isAuthorOfPublication").with_filter("dspace.entity.type:Person")
}

pub fn entity_ref(label: &str) -> RecordRef {
    RecordRef::new(Uuid::new_v4(), RecordKind::Entity, label)
}

pub fn authority_ref(label: &str) -> RecordRef {
    RecordRef::new(Uuid::new_v4(), RecordKind::Authority, label)
}

/// One page of entity candidates with descending relevance
pub fn candidate_page(labels: &[&str]) -> CandidatePage {
    let hits: Vec<CandidateHit> = labels
        .iter()
        .enumerate()
        .map(|(index, label)| CandidateHit::new(entity_ref(label), 1.0 - index as f32 * 0.1))
        .collect();
    let total = hits.len() as u64;
    PaginatedResult::new(hits, total, &PaginationParams::new(1, 5))
}
