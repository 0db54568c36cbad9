//! Data transfer objects for the movie endpoints

use rb_core::domain::value_objects::ListQuery;
use rb_shared::Pagination;
use serde::Deserialize;

/// Raw `page`, `limit` and `search` query parameters
///
/// Kept as strings so a non-numeric value falls back to the default
/// instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMoviesQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

impl ListMoviesQuery {
    pub fn into_list_query(self) -> ListQuery {
        let pagination = Pagination::from_raw(self.page.as_deref(), self.limit.as_deref());
        ListQuery::new(self.search, pagination)
    }
}
