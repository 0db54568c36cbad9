//! Movie repository trait defining the interface for catalog persistence.

use async_trait::async_trait;

use crate::domain::entities::{Movie, MovieDraft};
use crate::domain::value_objects::{ListQuery, Page};
use crate::errors::DomainError;

/// Repository trait for Movie entity persistence operations
///
/// Every method maps a missing row to [`DomainError::NotFound`] and a title
/// conflict to [`DomainError::Duplicate`]; other storage failures surface as
/// [`DomainError::Internal`].
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Insert a new movie and return its id
    async fn create(&self, draft: MovieDraft) -> Result<i64, DomainError>;

    /// Find a movie by its id
    async fn find_by_id(&self, id: i64) -> Result<Movie, DomainError>;

    /// Replace every stored field of an existing movie
    ///
    /// # Returns
    /// * `Ok(id)` - The updated movie's id
    /// * `Err(DomainError::NotFound)` - No movie with the given id
    /// * `Err(DomainError::Duplicate)` - The new title belongs to another movie
    async fn update(&self, id: i64, draft: MovieDraft) -> Result<i64, DomainError>;

    /// Delete a movie
    ///
    /// # Returns
    /// * `Ok(id)` - The deleted movie's id
    /// * `Err(DomainError::NotFound)` - No movie with the given id
    async fn delete(&self, id: i64) -> Result<i64, DomainError>;

    /// List one page of movies
    ///
    /// Newest-created first with ties broken by id descending. The search term,
    /// when present, is a case-insensitive substring match on the title.
    /// `total` counts every movie regardless of the search term or window.
    async fn list(&self, query: &ListQuery) -> Result<Page<Movie>, DomainError>;
}
