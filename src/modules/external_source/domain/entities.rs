/// Domain entities for externally-discovered records
///
/// An external entry is the immutable source-of-truth input to the resolution
/// workflow: a record fetched from a third-party source together with its
/// field metadata.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata field holding the entry's identifying URI
pub const URI_FIELD: &str = "dc.identifier.uri";

/// Single metadata value of an external entry field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataValue {
    pub value: String,
    pub language: Option<String>,
}

impl MetadataValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Field metadata of an external entry, keyed by qualified field name
pub type MetadataMap = BTreeMap<String, Vec<MetadataValue>>;

/// First value of a metadata field, if present
pub fn first_value<'a>(metadata: &'a MetadataMap, field: &str) -> Option<&'a MetadataValue> {
    metadata.get(field).and_then(|values| values.first())
}

/// An externally-discovered candidate record
///
/// Immutable input to the workflow; `value` doubles as the default query for
/// the local candidate lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalEntry {
    /// Identifier of the entry within its source
    pub id: String,
    /// Name of the external source the entry was fetched from
    pub source: String,
    /// Display value, used as the default search query
    pub value: String,
    pub metadata: MetadataMap,
    pub retrieved_at: DateTime<Utc>,
}

impl ExternalEntry {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            value: value.into(),
            metadata: MetadataMap::new(),
            retrieved_at: Utc::now(),
        }
    }

    pub fn with_metadata(mut self, field: impl Into<String>, value: MetadataValue) -> Self {
        self.metadata.entry(field.into()).or_default().push(value);
        self
    }

    /// The entry's identifying URI, if the source supplied one
    pub fn uri(&self) -> Option<&MetadataValue> {
        first_value(&self.metadata, URI_FIELD)
    }
}
