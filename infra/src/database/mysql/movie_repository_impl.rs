//! MySQL implementation of the MovieRepository trait.
//!
//! Listing runs its count and data queries inside a single transaction so the
//! reported total and the returned window come from the same snapshot.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use rb_core::domain::entities::{Movie, MovieDraft};
use rb_core::domain::value_objects::{ListQuery, Page};
use rb_core::errors::DomainError;
use rb_core::repositories::MovieRepository;

use super::{like_pattern, map_sqlx_error, to_id};

const RESOURCE: &str = "Movie";

const SELECT_COLUMNS: &str =
    "SELECT id, title, year, genre, rating, director, created_at, updated_at FROM movies";

/// MySQL implementation of MovieRepository
pub struct MySqlMovieRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlMovieRepository {
    /// Create a new MySQL movie repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Movie entity
    fn row_to_movie(row: &sqlx::mysql::MySqlRow) -> Result<Movie, DomainError> {
        let column = |name: &str, e: sqlx::Error| {
            DomainError::internal(format!("Failed to get {}: {}", name, e))
        };

        Ok(Movie {
            id: row.try_get("id").map_err(|e| column("id", e))?,
            title: row.try_get("title").map_err(|e| column("title", e))?,
            year: row.try_get("year").map_err(|e| column("year", e))?,
            genre: row.try_get("genre").map_err(|e| column("genre", e))?,
            rating: row.try_get("rating").map_err(|e| column("rating", e))?,
            director: row.try_get("director").map_err(|e| column("director", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }
}

#[async_trait]
impl MovieRepository for MySqlMovieRepository {
    async fn create(&self, draft: MovieDraft) -> Result<i64, DomainError> {
        let query = r#"
            INSERT INTO movies (title, year, genre, rating, director, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        let now = Utc::now();
        let result = sqlx::query(query)
            .bind(&draft.title)
            .bind(draft.year)
            .bind(&draft.genre)
            .bind(draft.rating)
            .bind(&draft.director)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        to_id(result.last_insert_id())
    }

    async fn find_by_id(&self, id: i64) -> Result<Movie, DomainError> {
        let query = format!("{} WHERE id = ?", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        Self::row_to_movie(&row)
    }

    async fn update(&self, id: i64, draft: MovieDraft) -> Result<i64, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        // Lock the row first; MySQL reports zero affected rows for a no-op update
        sqlx::query("SELECT id FROM movies WHERE id = ? FOR UPDATE")
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        let query = r#"
            UPDATE movies
            SET title = ?, year = ?, genre = ?, rating = ?, director = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&draft.title)
            .bind(draft.year)
            .bind(&draft.genre)
            .bind(draft.rating)
            .bind(&draft.director)
            .bind(Utc::now())
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        tx.commit().await.map_err(|e| map_sqlx_error(e, RESOURCE))?;
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<i64, DomainError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(RESOURCE));
        }
        Ok(id)
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<Movie>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        let limit = query.pagination.limit();
        let offset = query.pagination.offset();

        let rows = match query.search_term() {
            Some(term) => {
                let sql = format!(
                    "{} WHERE LOWER(title) LIKE LOWER(?) ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
                    SELECT_COLUMNS
                );
                sqlx::query(&sql)
                    .bind(like_pattern(term))
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&mut *tx)
                    .await
            }
            None => {
                let sql = format!(
                    "{} ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
                    SELECT_COLUMNS
                );
                sqlx::query(&sql)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&mut *tx)
                    .await
            }
        }
        .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        tx.commit().await.map_err(|e| map_sqlx_error(e, RESOURCE))?;

        let items = rows
            .iter()
            .map(Self::row_to_movie)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, u64::try_from(total).unwrap_or(0)))
    }
}
