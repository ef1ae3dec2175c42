//! Shared query parameter types for API handlers.

use httpkit_core::pagination::Pagination;
use serde::Deserialize;

/// Pagination parameters (`?page=&limit=`).
///
/// Kept as raw text so malformed values fall back to defaults instead of
/// rejecting the request. See [`httpkit_core::pagination`].
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    pub fn pagination(&self) -> Pagination {
        Pagination::from_query(self.page.as_deref(), self.limit.as_deref())
    }
}
