//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Placeholder secret; rejected by [`super::AppConfig::validate`] in production
pub const DEFAULT_JWT_SECRET: &str = "reelbase-dev-secret-change-in-production";

/// Longest accepted token lifetime, one year
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 60 * 60;

/// Token signing and password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HMAC secret for signing tokens
    pub jwt_secret: String,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Access token lifetime in seconds
    pub access_ttl_secs: i64,

    /// Refresh token lifetime in seconds
    pub refresh_ttl_secs: i64,

    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_JWT_SECRET),
            issuer: default_issuer(),
            access_ttl_secs: 1800,  // 30 minutes
            refresh_ttl_secs: 7200, // 2 hours
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl AuthConfig {
    /// Create a new configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token lifetime in minutes
    pub fn with_access_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_ttl_secs = minutes * 60;
        self
    }

    /// Set refresh token lifetime in hours
    pub fn with_refresh_ttl_hours(mut self, hours: i64) -> Self {
        self.refresh_ttl_secs = hours * 3600;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

fn default_issuer() -> String {
    String::from("reelbase")
}

fn default_bcrypt_cost() -> u32 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert!(config.is_using_default_secret());
        assert_eq!(config.issuer, "reelbase");
        assert_eq!(config.bcrypt_cost, 12);
    }

    #[test]
    fn test_auth_config_builders() {
        let config = AuthConfig::new("s3cret")
            .with_access_ttl_minutes(5)
            .with_refresh_ttl_hours(1);

        assert!(!config.is_using_default_secret());
        assert_eq!(config.access_ttl_secs, 300);
        assert_eq!(config.refresh_ttl_secs, 3600);
    }
}
