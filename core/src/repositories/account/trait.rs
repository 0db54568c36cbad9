//! Account repository trait defining the interface for account persistence.
//!
//! Implementations classify storage failures themselves: a missing row is
//! [`DomainError::NotFound`], a unique-key conflict on email is
//! [`DomainError::Duplicate`], and anything else is [`DomainError::Internal`].

use async_trait::async_trait;

use crate::domain::entities::{Account, NewAccount};
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use rb_core::repositories::AccountRepository;
/// use rb_core::domain::entities::{Account, NewAccount};
/// use rb_core::errors::DomainError;
///
/// struct PostgresAccountRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl AccountRepository for PostgresAccountRepository {
///     async fn create(&self, account: NewAccount) -> Result<i64, DomainError> {
///         // Implementation here
///         Ok(1)
///     }
///
///     // ... other methods
/// #   async fn find_by_id(&self, id: i64) -> Result<Account, DomainError> { unimplemented!() }
/// #   async fn find_by_email(&self, email: &str) -> Result<Account, DomainError> { unimplemented!() }
/// #   async fn update(&self, account: Account) -> Result<i64, DomainError> { unimplemented!() }
/// #   async fn delete(&self, id: i64) -> Result<i64, DomainError> { unimplemented!() }
/// }
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account and return its id
    ///
    /// # Returns
    /// * `Ok(id)` - The id assigned by the store
    /// * `Err(DomainError::Duplicate)` - The email is already registered
    async fn create(&self, account: NewAccount) -> Result<i64, DomainError>;

    /// Find an account by its id
    ///
    /// # Returns
    /// * `Ok(Account)` - Account found
    /// * `Err(DomainError::NotFound)` - No account with the given id
    async fn find_by_id(&self, id: i64) -> Result<Account, DomainError>;

    /// Find an account by email
    ///
    /// # Returns
    /// * `Ok(Account)` - Account found
    /// * `Err(DomainError::NotFound)` - No account with the given email
    async fn find_by_email(&self, email: &str) -> Result<Account, DomainError>;

    /// Persist names, email and hash of an existing account
    ///
    /// # Returns
    /// * `Ok(id)` - The updated account's id
    /// * `Err(DomainError::NotFound)` - The account does not exist
    /// * `Err(DomainError::Duplicate)` - The new email belongs to another account
    async fn update(&self, account: Account) -> Result<i64, DomainError>;

    /// Delete an account
    ///
    /// # Returns
    /// * `Ok(id)` - The deleted account's id
    /// * `Err(DomainError::NotFound)` - The account does not exist
    async fn delete(&self, id: i64) -> Result<i64, DomainError>;
}
