//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod account_repository_impl;
pub mod movie_repository_impl;

// Re-export the MySQL implementations
pub use account_repository_impl::MySqlAccountRepository;
pub use movie_repository_impl::MySqlMovieRepository;

use rb_core::errors::DomainError;

/// Classify a SQLx failure for `resource`
///
/// A missing row becomes `NotFound`, a unique-key violation becomes
/// `Duplicate`, and everything else is `Internal`.
pub(crate) fn map_sqlx_error(error: sqlx::Error, resource: &str) -> DomainError {
    match &error {
        sqlx::Error::RowNotFound => DomainError::not_found(resource),
        sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::duplicate(resource),
        _ => {
            tracing::error!(resource, error = %error, "Database operation failed");
            DomainError::internal(format!("Database query failed: {}", error))
        }
    }
}

/// Convert an AUTO_INCREMENT value into the domain id type
pub(crate) fn to_id(last_insert_id: u64) -> Result<i64, DomainError> {
    i64::try_from(last_insert_id)
        .map_err(|_| DomainError::internal(format!("Generated id {} is out of range", last_insert_id)))
}

/// Escape `LIKE` metacharacters and wrap the term for a substring match
///
/// MySQL's default `LIKE` escape character is the backslash.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
