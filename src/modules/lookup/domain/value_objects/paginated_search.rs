use serde::{Deserialize, Serialize};

use crate::shared::application::PaginationParams;

/// Pagination id of the entry-lookup candidate fetch
pub const ENTRY_LOOKUP_PAGINATION_ID: &str = "external-entry-import";

/// Page size of the entry-lookup candidate fetch
pub const ENTRY_LOOKUP_PAGE_SIZE: u32 = 5;

/// Search options for a paginated candidate lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedSearch {
    pub query: String,
    /// Id distinguishing this pagination from sibling paginated regions
    pub pagination_id: String,
    pub pagination: PaginationParams,
}

impl PaginatedSearch {
    /// Search options used for the single candidate fetch of an import workflow
    pub fn for_entry_lookup(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            pagination_id: ENTRY_LOOKUP_PAGINATION_ID.to_string(),
            pagination: PaginationParams::new(1, ENTRY_LOOKUP_PAGE_SIZE),
        }
    }

    pub fn with_pagination(mut self, pagination: PaginationParams) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.query.trim().is_empty() {
            return Err("Search query cannot be empty".to_string());
        }

        if self.pagination.page_size == 0 || self.pagination.page_size > 100 {
            return Err("Page size must be between 1 and 100".to_string());
        }

        Ok(())
    }
}
