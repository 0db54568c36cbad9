//! Data transfer objects for the account endpoints

use rb_core::domain::value_objects::AuthOutcome;
use serde::{Deserialize, Serialize};

/// Body returned by register and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub status: u16,
    pub message: String,
    pub id: i64,
}

impl AuthResponse {
    pub fn new(outcome: AuthOutcome, status: u16, message: impl Into<String>) -> Self {
        Self {
            access_token: outcome.tokens.access_token,
            refresh_token: outcome.tokens.refresh_token,
            status,
            message: message.into(),
            id: outcome.account_id,
        }
    }
}
