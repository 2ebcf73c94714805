/// The exclusive import choice of a resolution workflow
///
/// Exactly one value is active at any observable instant; `None` is both the
/// initial state and the state every commit returns to. Mutual exclusion of
/// the four concrete choices follows from this being a single variable, not
/// from a separate validation pass.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportChoice {
    None,
    /// Reuse an existing local entity from the candidate list
    LocalEntity,
    /// Reuse an existing local authority record from the candidate list
    LocalAuthority,
    /// Create a new entity from the external entry
    NewEntity,
    /// Create a new authority record from the external entry
    NewAuthority,
}

impl ImportChoice {
    /// Whether this choice reuses an existing local record
    pub fn is_local(&self) -> bool {
        matches!(self, ImportChoice::LocalEntity | ImportChoice::LocalAuthority)
    }

    /// Whether this choice creates a new record from the external entry
    pub fn is_new(&self) -> bool {
        matches!(self, ImportChoice::NewEntity | ImportChoice::NewAuthority)
    }
}

impl Default for ImportChoice {
    fn default() -> Self {
        ImportChoice::None
    }
}

impl std::fmt::Display for ImportChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportChoice::None => write!(f, "none"),
            ImportChoice::LocalEntity => write!(f, "local_entity"),
            ImportChoice::LocalAuthority => write!(f, "local_authority"),
            ImportChoice::NewEntity => write!(f, "new_entity"),
            ImportChoice::NewAuthority => write!(f, "new_authority"),
        }
    }
}

impl std::str::FromStr for ImportChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(ImportChoice::None),
            "local_entity" => Ok(ImportChoice::LocalEntity),
            "local_authority" => Ok(ImportChoice::LocalAuthority),
            "new_entity" => Ok(ImportChoice::NewEntity),
            "new_authority" => Ok(ImportChoice::NewAuthority),
            _ => Err(format!("Invalid import choice: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_choice_display() {
        assert_eq!(ImportChoice::None.to_string(), "none");
        assert_eq!(ImportChoice::LocalEntity.to_string(), "local_entity");
        assert_eq!(ImportChoice::NewAuthority.to_string(), "new_authority");
    }

    #[test]
    fn test_import_choice_from_str() {
        assert_eq!(
            "local_entity".parse::<ImportChoice>().unwrap(),
            ImportChoice::LocalEntity
        );
        assert_eq!(
            "NEW_ENTITY".parse::<ImportChoice>().unwrap(),
            ImportChoice::NewEntity
        );
        assert!("invalid".parse::<ImportChoice>().is_err());
    }

    #[test]
    fn test_choice_classification() {
        assert!(ImportChoice::LocalEntity.is_local());
        assert!(ImportChoice::LocalAuthority.is_local());
        assert!(ImportChoice::NewEntity.is_new());
        assert!(ImportChoice::NewAuthority.is_new());
        assert!(!ImportChoice::None.is_local());
        assert!(!ImportChoice::None.is_new());
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(ImportChoice::default(), ImportChoice::None);
    }
}
