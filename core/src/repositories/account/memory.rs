//! In-memory implementation of AccountRepository for tests and demos

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Account, NewAccount};
use crate::errors::DomainError;

use super::trait_::AccountRepository;

const RESOURCE: &str = "Account";

#[derive(Default)]
struct Store {
    next_id: i64,
    accounts: HashMap<i64, Account>,
}

impl Store {
    /// Emails compare case-insensitively, matching the MySQL collation
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.accounts
            .values()
            .any(|a| Some(a.id) != except && a.email.eq_ignore_ascii_case(email))
    }
}

/// Account repository backed by a `HashMap`; ids start at 1
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.store.read().await.accounts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: NewAccount) -> Result<i64, DomainError> {
        let mut store = self.store.write().await;

        if store.email_taken(&account.email, None) {
            return Err(DomainError::duplicate(RESOURCE));
        }

        store.next_id += 1;
        let id = store.next_id;
        let now = Utc::now();
        store.accounts.insert(
            id,
            Account {
                id,
                first_name: account.first_name,
                last_name: account.last_name,
                email: account.email,
                password_hash: account.password_hash,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Account, DomainError> {
        let store = self.store.read().await;
        store
            .accounts
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(RESOURCE))
    }

    async fn find_by_email(&self, email: &str) -> Result<Account, DomainError> {
        let store = self.store.read().await;
        store
            .accounts
            .values()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned()
            .ok_or_else(|| DomainError::not_found(RESOURCE))
    }

    async fn update(&self, account: Account) -> Result<i64, DomainError> {
        let mut store = self.store.write().await;

        if !store.accounts.contains_key(&account.id) {
            return Err(DomainError::not_found(RESOURCE));
        }
        if store.email_taken(&account.email, Some(account.id)) {
            return Err(DomainError::duplicate(RESOURCE));
        }

        let id = account.id;
        store.accounts.insert(id, account);
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<i64, DomainError> {
        let mut store = self.store.write().await;
        store
            .accounts
            .remove(&id)
            .map(|_| id)
            .ok_or_else(|| DomainError::not_found(RESOURCE))
    }
}
