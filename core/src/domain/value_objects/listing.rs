//! List query and page result for catalog listing.

use rb_shared::Pagination;
use serde::{Deserialize, Serialize};

/// Filter and window for a list call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive title substring; `None` or blank lists everything
    pub search: Option<String>,

    pub pagination: Pagination,
}

impl ListQuery {
    pub fn new(search: Option<String>, pagination: Pagination) -> Self {
        Self { search, pagination }
    }

    /// Trimmed search term, or `None` when it is absent or blank
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// One window of results plus the total row count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,

    /// Count of all rows in the collection, independent of filter and window
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }
}
