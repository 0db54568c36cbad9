//! # Reelbase Core
//!
//! Core business logic and domain layer for the Reelbase backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod clock;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::entities::{Account, AccountProfile, Claims, Movie, MovieDraft, NewAccount, TokenPair};
pub use domain::value_objects::{
    AuthOutcome, ListQuery, LoginInput, MovieInput, Page, ProfileInput, RegisterInput,
};
pub use errors::{AuthError, DomainError, DomainResult, ErrorKind, TokenError};
pub use repositories::{
    AccountRepository, InMemoryAccountRepository, InMemoryMovieRepository, MovieRepository,
};
pub use services::{
    AccountService, BcryptPasswordHasher, CatalogService, InputValidator, PasswordHasher,
    TokenService, TokenServiceConfig,
};
