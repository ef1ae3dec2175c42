//! Page/limit query defaults.
//!
//! Query text is parsed leniently: anything missing, malformed, or out of
//! range falls back to the default instead of producing an error.

use serde::Serialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// 1-based page number from raw query text. Defaults to [`DEFAULT_PAGE`].
pub fn page_or_default(raw: Option<&str>) -> i64 {
    match raw.map(str::parse::<i64>) {
        Some(Ok(page)) if page >= 1 => page,
        _ => DEFAULT_PAGE,
    }
}

/// Page size from raw query text.
///
/// Values outside `1..=MAX_LIMIT` reset to [`DEFAULT_LIMIT`]; they are not
/// clamped to the nearest bound.
pub fn limit_or_default(raw: Option<&str>) -> i64 {
    match raw.map(str::parse::<i64>) {
        Some(Ok(limit)) if (1..=MAX_LIMIT).contains(&limit) => limit,
        _ => DEFAULT_LIMIT,
    }
}

/// Resolved pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: page_or_default(page),
            limit: limit_or_default(limit),
        }
    }

    /// Number of records to skip.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}
