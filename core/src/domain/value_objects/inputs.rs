//! Request payloads accepted by the domain services.
//!
//! Each payload carries its own `validator` rules; services run them through
//! [`crate::services::InputValidator`] before touching storage.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::MovieDraft;

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub last_name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
}

/// Login payload
///
/// Only presence is checked on the password; a short password is simply a wrong one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

/// Profile update payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileInput {
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub first_name: String,

    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub last_name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

/// Movie create/update payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MovieInput {
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub title: String,

    #[validate(range(min = 1800, message = "must be 1800 or later"))]
    pub year: i32,

    #[validate(length(min = 1, message = "is required"))]
    pub genre: String,

    #[validate(range(min = 0.0, max = 10.0, message = "must be between 0 and 10"))]
    pub rating: f64,

    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub director: String,
}

impl From<MovieInput> for MovieDraft {
    fn from(input: MovieInput) -> Self {
        Self {
            title: input.title,
            year: input.year,
            genre: input.genre,
            rating: input.rating,
            director: input.director,
        }
    }
}
