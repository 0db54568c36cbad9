//! In-memory implementation of MovieRepository for tests and demos

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Movie, MovieDraft};
use crate::domain::value_objects::{ListQuery, Page};
use crate::errors::DomainError;

use super::trait_::MovieRepository;

const RESOURCE: &str = "Movie";

#[derive(Default)]
struct Store {
    next_id: i64,
    movies: HashMap<i64, Movie>,
}

impl Store {
    fn title_taken(&self, title: &str, except: Option<i64>) -> bool {
        let title = title.to_lowercase();
        self.movies
            .values()
            .any(|m| Some(m.id) != except && m.title.to_lowercase() == title)
    }
}

/// Movie repository backed by a `HashMap`; ids start at 1
#[derive(Clone, Default)]
pub struct InMemoryMovieRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryMovieRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored movies
    pub async fn len(&self) -> usize {
        self.store.read().await.movies.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn create(&self, draft: MovieDraft) -> Result<i64, DomainError> {
        let mut store = self.store.write().await;

        if store.title_taken(&draft.title, None) {
            return Err(DomainError::duplicate(RESOURCE));
        }

        store.next_id += 1;
        let id = store.next_id;
        store.movies.insert(id, Movie::from_draft(id, draft, Utc::now()));
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Movie, DomainError> {
        let store = self.store.read().await;
        store
            .movies
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(RESOURCE))
    }

    async fn update(&self, id: i64, draft: MovieDraft) -> Result<i64, DomainError> {
        let mut store = self.store.write().await;

        if !store.movies.contains_key(&id) {
            return Err(DomainError::not_found(RESOURCE));
        }
        if store.title_taken(&draft.title, Some(id)) {
            return Err(DomainError::duplicate(RESOURCE));
        }

        if let Some(movie) = store.movies.get_mut(&id) {
            movie.apply(draft, Utc::now());
        }
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<i64, DomainError> {
        let mut store = self.store.write().await;
        store
            .movies
            .remove(&id)
            .map(|_| id)
            .ok_or_else(|| DomainError::not_found(RESOURCE))
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<Movie>, DomainError> {
        let store = self.store.read().await;
        let needle = query.search_term().map(str::to_lowercase);

        let mut matching: Vec<&Movie> = store
            .movies
            .values()
            .filter(|m| match &needle {
                Some(needle) => m.title.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let offset = usize::try_from(query.pagination.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.pagination.limit()).unwrap_or(usize::MAX);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(Page::new(items, store.movies.len() as u64))
    }
}
