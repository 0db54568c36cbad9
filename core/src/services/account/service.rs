//! Main account service implementation

use std::sync::Arc;

use crate::domain::entities::{AccountProfile, NewAccount};
use crate::domain::value_objects::{AuthOutcome, LoginInput, ProfileInput, RegisterInput};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;
use crate::services::validation::InputValidator;

/// Account service for registration, login and profile maintenance
pub struct AccountService<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    /// Account repository for database operations
    repository: Arc<R>,
    /// Password hashing strategy
    hasher: Arc<H>,
    /// Token service for JWT issuance
    token_service: Arc<TokenService>,
    validator: InputValidator,
}

impl<R, H> AccountService<R, H>
where
    R: AccountRepository,
    H: PasswordHasher,
{
    /// Create a new account service
    ///
    /// # Arguments
    ///
    /// * `repository` - Repository for account persistence
    /// * `hasher` - Password hasher
    /// * `token_service` - Service for JWT token issuance
    /// * `validator` - Input validator applied before any storage call
    pub fn new(
        repository: Arc<R>,
        hasher: Arc<H>,
        token_service: Arc<TokenService>,
        validator: InputValidator,
    ) -> Self {
        Self {
            repository,
            hasher,
            token_service,
            validator,
        }
    }

    /// Register a new account and issue its first token pair
    ///
    /// # Returns
    ///
    /// * `Ok(AuthOutcome)` - The new account id and tokens
    /// * `Err(DomainError::Validation)` - A field failed validation; nothing was stored
    /// * `Err(DomainError::Duplicate)` - The email is already registered
    pub async fn register(&self, input: RegisterInput) -> DomainResult<AuthOutcome> {
        self.validator.validate(&input)?;

        let password_hash = self.hasher.hash(&input.password)?;
        let account_id = self
            .repository
            .create(NewAccount {
                first_name: input.first_name,
                last_name: input.last_name,
                email: input.email,
                password_hash,
            })
            .await
            .map_err(|e| {
                if e.is_internal() {
                    tracing::error!(error = %e, "Failed to store account");
                }
                e
            })?;

        let tokens = self.token_service.issue_pair(account_id)?;
        tracing::info!(account_id, "Account registered");

        Ok(AuthOutcome::new(account_id, tokens))
    }

    /// Check credentials and issue a token pair
    ///
    /// An unknown email and a wrong password both fail with
    /// [`AuthError::InvalidCredentials`].
    pub async fn login(&self, input: LoginInput) -> DomainResult<AuthOutcome> {
        self.validator.validate(&input)?;

        let account = match self.repository.find_by_email(&input.email).await {
            Ok(account) => account,
            Err(DomainError::NotFound { .. }) => {
                tracing::warn!("Login rejected: unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load account for login");
                return Err(e);
            }
        };

        if !self.hasher.verify(&account.password_hash, &input.password)? {
            tracing::warn!(account_id = account.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self.token_service.issue_pair(account.id)?;
        tracing::info!(account_id = account.id, "Account logged in");

        Ok(AuthOutcome::new(account.id, tokens))
    }

    /// Public profile of an account
    pub async fn profile(&self, id: i64) -> DomainResult<AccountProfile> {
        self.validator.validate_id(id)?;
        let account = self.repository.find_by_id(id).await?;
        Ok(account.profile())
    }

    /// Replace names and email of an account
    pub async fn update_profile(&self, id: i64, input: ProfileInput) -> DomainResult<i64> {
        self.validator.validate_id(id)?;
        self.validator.validate(&input)?;

        let mut account = self.repository.find_by_id(id).await?;
        account.rename(input.first_name, input.last_name, input.email);
        let id = self.repository.update(account).await?;

        tracing::info!(account_id = id, "Account profile updated");
        Ok(id)
    }

    /// Delete an account
    pub async fn delete(&self, id: i64) -> DomainResult<i64> {
        self.validator.validate_id(id)?;
        let id = self.repository.delete(id).await?;

        tracing::info!(account_id = id, "Account deleted");
        Ok(id)
    }
}
