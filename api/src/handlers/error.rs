//! Translation of domain failures into HTTP status codes and JSON envelopes.
//!
//! Every failing call funnels through [`map_domain_error`], so the body shape
//! is always `{ "status": <code>, "message": <text> }`.

use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use rb_core::errors::{DomainError, ErrorKind};
use rb_shared::ErrorResponse;

/// Convenient result alias for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Domain failure crossing the HTTP boundary
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        map_domain_error(&self.0).0
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::Duplicate | ErrorKind::Malformed => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Status code and client-facing message for a domain failure
pub fn map_domain_error(error: &DomainError) -> (StatusCode, String) {
    let status = status_for(error.kind());
    let message = match error {
        DomainError::NotFound { resource } => format!("{} not found", resource),
        DomainError::Duplicate { .. } => "Already exists".to_string(),
        DomainError::Validation { message }
        | DomainError::Unauthorized { message }
        | DomainError::Malformed { message }
        | DomainError::Internal { message } => message.clone(),
        DomainError::Auth(auth) => auth.to_string(),
        DomainError::Token(token) => token.to_string(),
    };
    (status, message)
}

/// Build the error envelope response for a domain failure
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, message) = map_domain_error(error);

    if error.is_internal() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }

    HttpResponse::build(status).json(ErrorResponse::new(status.as_u16(), message))
}

/// Envelope for a failure that never reached the domain layer
pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(status.as_u16(), message))
}
