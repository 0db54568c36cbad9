//! Main token service implementation

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::clock::{Clock, SystemClock};
use crate::domain::entities::{Claims, TokenPair};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Issues and verifies HS256-signed JWTs
///
/// Stateless apart from the signing secret, so one instance is shared by every
/// worker. Expiry is judged against the injected [`Clock`] rather than the
/// library's own clock and leeway.
#[derive(Clone)]
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Creates a new token service reading the system clock
    pub fn new(config: TokenServiceConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new token service with an explicit time source
    pub fn with_clock(config: TokenServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            clock,
        }
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Signs a token for `subject_id` that expires `ttl` from now
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact JWT
    /// * `Err(TokenError::GenerationFailed)` - Signing failed or `now + ttl` is out of range
    pub fn issue(&self, subject_id: i64, ttl: Duration) -> Result<String, DomainError> {
        let now = self.clock.now();
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            tracing::error!(ttl_secs = ttl.num_seconds(), "Token lifetime out of range");
            DomainError::Token(TokenError::GenerationFailed)
        })?;
        let claims = Claims::new(
            subject_id,
            self.config.issuer.as_str(),
            now.timestamp(),
            expires_at.timestamp(),
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            DomainError::Token(TokenError::GenerationFailed)
        })
    }

    /// Issues an access token and a refresh token for `subject_id`
    pub fn issue_pair(&self, subject_id: i64) -> Result<TokenPair, DomainError> {
        let access_token = self.issue(subject_id, self.config.access_ttl)?;
        let refresh_token = self.issue(subject_id, self.config.refresh_ttl)?;
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Verifies a token and returns its claims
    ///
    /// Signature, algorithm, issuer and structural problems are reported as
    /// [`TokenError::Malformed`] before expiry is considered, so a tampered
    /// token never reads as merely expired.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::Malformed)` - Token cannot be trusted
    /// * `Err(TokenError::Expired)` - Token is authentic but `now >= exp`
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected token");
                DomainError::Token(TokenError::Malformed)
            })?;
        let claims = token_data.claims;

        if claims.subject_id().is_none() {
            return Err(DomainError::Token(TokenError::Malformed));
        }
        if claims.is_expired_at(self.clock.now()) {
            return Err(DomainError::Token(TokenError::Expired));
        }

        Ok(claims)
    }
}
