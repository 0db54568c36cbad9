//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Reelbase application.
//! It provides the MySQL-backed implementations of the repository traits
//! declared in `rb_core`.
//!
//! ## Architecture
//!
//! - **Database**: connection pool, embedded migrations and SQLx repositories

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlAccountRepository, MySqlMovieRepository, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
