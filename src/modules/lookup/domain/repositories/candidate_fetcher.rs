use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::RecordRef;
use crate::modules::external_source::RelationshipConstraint;
use crate::modules::lookup::domain::value_objects::PaginatedSearch;
use crate::shared::application::PaginatedResult;
use crate::shared::errors::AppResult;

/// One candidate returned by the lookup backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateHit {
    pub record: RecordRef,
    /// Backend relevance score; the workflow never reorders by it
    pub relevance: f32,
}

impl CandidateHit {
    pub fn new(record: RecordRef, relevance: f32) -> Self {
        Self { record, relevance }
    }
}

/// One page of candidates
pub type CandidatePage = PaginatedResult<CandidateHit>;

/// Repository interface for fetching local candidates for an external entry
/// This defines the contract for the search backend; ranking, retry and
/// caching are its responsibility, not the workflow's
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateFetcher: Send + Sync {
    /// Search local records structurally similar to the query, constrained
    /// by relationship type
    async fn local_candidates(
        &self,
        constraint: &RelationshipConstraint,
        search: &PaginatedSearch,
    ) -> AppResult<CandidatePage>;
}
