//! Account entity representing a registered user of the catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored account, including the password hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Surrogate key assigned by the store
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    /// Unique across all accounts
    pub email: String,

    /// bcrypt hash; never leaves the service layer
    pub password_hash: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Public view of the account without the hash
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Replaces names and email, bumping `updated_at`
    pub fn rename(&mut self, first_name: String, last_name: String, email: String) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.email = email;
        self.updated_at = Utc::now();
    }
}

/// Account data ready to be inserted; the store assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Serializable account view returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
