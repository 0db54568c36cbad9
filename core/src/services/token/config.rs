//! Configuration for the token service

use chrono::Duration;
use rb_shared::AuthConfig;

use crate::domain::entities::JWT_ISSUER;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Expected and issued `iss` claim
    pub issuer: String,
    /// Access token lifetime
    pub access_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_ttl: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            issuer: JWT_ISSUER.to_string(),
            access_ttl: Duration::minutes(30),
            refresh_ttl: Duration::hours(2),
        }
    }
}

impl TokenServiceConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            issuer: config.issuer.clone(),
            access_ttl: ttl_from_secs(config.access_ttl_secs),
            refresh_ttl: ttl_from_secs(config.refresh_ttl_secs),
        }
    }
}

/// Out-of-range values saturate; [`super::TokenService::issue`] then refuses them
fn ttl_from_secs(secs: i64) -> Duration {
    Duration::try_seconds(secs).unwrap_or(Duration::MAX)
}
