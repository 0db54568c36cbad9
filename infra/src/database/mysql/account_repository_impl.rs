//! MySQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use rb_core::domain::entities::{Account, NewAccount};
use rb_core::errors::DomainError;
use rb_core::repositories::AccountRepository;

use super::{map_sqlx_error, to_id};

const RESOURCE: &str = "Account";

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let column = |name: &str, e: sqlx::Error| {
            DomainError::internal(format!("Failed to get {}: {}", name, e))
        };

        Ok(Account {
            id: row.try_get("id").map_err(|e| column("id", e))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| column("first_name", e))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| column("last_name", e))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| column("password_hash", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn create(&self, account: NewAccount) -> Result<i64, DomainError> {
        let query = r#"
            INSERT INTO accounts (first_name, last_name, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let now = Utc::now();
        let result = sqlx::query(query)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        to_id(result.last_insert_id())
    }

    async fn find_by_id(&self, id: i64) -> Result<Account, DomainError> {
        let query = r#"
            SELECT id, first_name, last_name, email, password_hash, created_at, updated_at
            FROM accounts
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        Self::row_to_account(&row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Account, DomainError> {
        let query = r#"
            SELECT id, first_name, last_name, email, password_hash, created_at, updated_at
            FROM accounts
            WHERE email = ?
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        Self::row_to_account(&row)
    }

    async fn update(&self, account: Account) -> Result<i64, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        // Lock the row first; MySQL reports zero affected rows for a no-op update
        sqlx::query("SELECT id FROM accounts WHERE id = ? FOR UPDATE")
            .bind(account.id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        let query = r#"
            UPDATE accounts
            SET first_name = ?, last_name = ?, email = ?, password_hash = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.updated_at)
            .bind(account.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        tx.commit().await.map_err(|e| map_sqlx_error(e, RESOURCE))?;
        Ok(account.id)
    }

    async fn delete(&self, id: i64) -> Result<i64, DomainError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, RESOURCE))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(RESOURCE));
        }
        Ok(id)
    }
}
