/// Domain entities for the local catalog
///
/// The workflow never loads full catalog records; it only holds opaque
/// references to them and forwards the chosen one to the host.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of local record a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Entity,
    Authority,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Entity => write!(f, "entity"),
            RecordKind::Authority => write!(f, "authority"),
        }
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entity" => Ok(RecordKind::Entity),
            "authority" => Ok(RecordKind::Authority),
            _ => Err(format!("Invalid record kind: {}", s)),
        }
    }
}

/// Opaque reference to a local catalog record
///
/// Rendering of the referenced record is the host's concern; the workflow
/// only stores and forwards these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRef {
    pub id: Uuid,
    pub kind: RecordKind,
    pub label: String,
}

impl RecordRef {
    pub fn new(id: Uuid, kind: RecordKind, label: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
        }
    }

    /// New entity reference with a generated id
    pub fn entity(label: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4(), RecordKind::Entity, label)
    }

    /// New authority reference with a generated id
    pub fn authority(label: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4(), RecordKind::Authority, label)
    }
}
