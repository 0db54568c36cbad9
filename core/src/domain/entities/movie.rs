//! Movie entity, the catalog entry managed by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,

    /// Unique across the catalog
    pub title: String,

    pub year: i32,

    pub genre: String,

    /// 0 to 10 inclusive
    pub rating: f64,

    pub director: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Validated movie fields used for both create and full-replacement update
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub rating: f64,
    pub director: String,
}

impl Movie {
    /// Builds a stored movie from a draft with the given id and timestamp
    pub fn from_draft(id: i64, draft: MovieDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            year: draft.year,
            genre: draft.genre,
            rating: draft.rating,
            director: draft.director,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every mutable field, keeping id and `created_at`
    pub fn apply(&mut self, draft: MovieDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.year = draft.year;
        self.genre = draft.genre;
        self.rating = draft.rating;
        self.director = draft.director;
        self.updated_at = now;
    }
}
