//! Input validation at the service boundary.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::DomainError;

/// Runs `validator` rules and folds failures into one [`DomainError::Validation`]
///
/// The message lists every failing field as `field: reason`, sorted by field
/// name and joined with `"; "`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputValidator;

impl InputValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate<T: Validate>(&self, input: &T) -> Result<(), DomainError> {
        input
            .validate()
            .map_err(|errors| DomainError::validation(describe(&errors)))
    }

    /// Rejects non-positive resource ids
    pub fn validate_id(&self, id: i64) -> Result<(), DomainError> {
        if id < 1 {
            return Err(DomainError::validation("id: must be a positive integer"));
        }
        Ok(())
    }
}

fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors
                .iter()
                .map(move |error| format!("{}: {}", field, reason(error)))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn reason(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    }
}
