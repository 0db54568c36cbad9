//! Main catalog service implementation

use std::sync::Arc;

use crate::domain::entities::Movie;
use crate::domain::value_objects::{ListQuery, MovieInput, Page};
use crate::errors::DomainResult;
use crate::repositories::MovieRepository;
use crate::services::validation::InputValidator;

/// CRUD and listing over the movie catalog
pub struct CatalogService<R: MovieRepository> {
    repository: Arc<R>,
    validator: InputValidator,
}

impl<R: MovieRepository> CatalogService<R> {
    pub fn new(repository: Arc<R>, validator: InputValidator) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Validate and store a new movie, returning its id
    pub async fn create(&self, input: MovieInput) -> DomainResult<i64> {
        self.validator.validate(&input)?;

        let id = self.repository.create(input.into()).await?;
        tracing::info!(movie_id = id, "Movie created");
        Ok(id)
    }

    pub async fn get(&self, id: i64) -> DomainResult<Movie> {
        self.validator.validate_id(id)?;
        self.repository.find_by_id(id).await
    }

    /// One page of movies, newest first; a zero page or limit uses the defaults
    pub async fn list(&self, mut query: ListQuery) -> DomainResult<Page<Movie>> {
        query.pagination = query.pagination.normalized();
        self.repository.list(&query).await
    }

    /// Replace every field of movie `id` with the validated body
    pub async fn update(&self, id: i64, input: MovieInput) -> DomainResult<i64> {
        self.validator.validate_id(id)?;
        self.validator.validate(&input)?;

        let id = self.repository.update(id, input.into()).await?;
        tracing::info!(movie_id = id, "Movie updated");
        Ok(id)
    }

    pub async fn delete(&self, id: i64) -> DomainResult<i64> {
        self.validator.validate_id(id)?;

        let id = self.repository.delete(id).await?;
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(id)
    }
}
