//! Error types for authentication and token handling
//!
//! The display strings double as the client-facing messages, so they are kept
//! short and free of internal detail.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two cases are deliberately indistinguishable
    #[error("Wrong email or password")]
    InvalidCredentials,

    #[error("Authorization header is required")]
    MissingToken,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token is expired")]
    Expired,

    /// Bad signature, wrong algorithm, wrong issuer, or a structurally invalid token
    #[error("Invalid token")]
    Malformed,

    #[error("Token generation failed")]
    GenerationFailed,
}
