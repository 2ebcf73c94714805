use serde::{Deserialize, Serialize};

/// Constraint on what kind of local record may substitute an external entry
///
/// Parameterizes the candidate lookup; the workflow itself never interprets
/// the constraint beyond passing it through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipConstraint {
    /// Relationship type the candidates must satisfy (e.g. "isAuthorOfPublication")
    pub relationship_type: String,
    /// Optional backend filter expression
    pub filter: Option<String>,
    /// Optional named search configuration on the backend
    pub search_configuration: Option<String>,
}

impl RelationshipConstraint {
    pub fn new(relationship_type: impl Into<String>) -> Self {
        Self {
            relationship_type: relationship_type.into(),
            filter: None,
            search_configuration: None,
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_search_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.search_configuration = Some(configuration.into());
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.relationship_type.trim().is_empty() {
            return Err("Relationship type cannot be empty".to_string());
        }

        Ok(())
    }
}
