//! Result of a successful registration or login.

use serde::{Deserialize, Serialize};

use crate::domain::entities::TokenPair;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    /// Account the tokens were issued for
    pub account_id: i64,

    pub tokens: TokenPair,
}

impl AuthOutcome {
    pub fn new(account_id: i64, tokens: TokenPair) -> Self {
        Self { account_id, tokens }
    }
}
