//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Unique-key conflict on create or update
    #[error("Already exists: {resource}")]
    Duplicate { resource: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Input that could not be decoded at all (bad JSON, non-numeric path id)
    #[error("Malformed input: {message}")]
    Malformed { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Coarse classification used by outer layers to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Duplicate,
    NotFound,
    Unauthorized,
    Malformed,
    Internal,
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn duplicate(resource: impl Into<String>) -> Self {
        Self::Duplicate {
            resource: resource.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } => ErrorKind::Validation,
            DomainError::Duplicate { .. } => ErrorKind::Duplicate,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Unauthorized { .. } => ErrorKind::Unauthorized,
            DomainError::Malformed { .. } => ErrorKind::Malformed,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(AuthError::InvalidCredentials) => ErrorKind::Validation,
            DomainError::Auth(AuthError::MissingToken) => ErrorKind::Unauthorized,
            DomainError::Token(TokenError::Expired) => ErrorKind::Unauthorized,
            DomainError::Token(TokenError::Malformed) => ErrorKind::Malformed,
            DomainError::Token(TokenError::GenerationFailed) => ErrorKind::Internal,
        }
    }

    /// True for failures caused by the backing store or other infrastructure
    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
