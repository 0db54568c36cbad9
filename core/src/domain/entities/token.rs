//! Token entities for JWT-based authentication.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// JWT issuer
pub const JWT_ISSUER: &str = "reelbase";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account id rendered as a string)
    pub sub: String,

    /// Issuer
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    pub fn new(subject_id: i64, issuer: impl Into<String>, iat: i64, exp: i64) -> Self {
        Self {
            sub: subject_id.to_string(),
            iss: issuer.into(),
            iat,
            exp,
        }
    }

    /// Parses the subject back into an account id
    pub fn subject_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Expired once `now` reaches `exp`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// Access and refresh tokens issued together at registration and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_round_trip() {
        let claims = Claims::new(42, JWT_ISSUER, 0, 10);
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.subject_id(), Some(42));
    }

    #[test]
    fn test_non_numeric_subject() {
        let claims = Claims {
            sub: "abc".to_string(),
            ..Claims::new(1, JWT_ISSUER, 0, 10)
        };
        assert_eq!(claims.subject_id(), None);
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let claims = Claims::new(1, JWT_ISSUER, 1_000, 1_060);
        let at = |secs: i64| Utc.timestamp_opt(secs, 0).single().unwrap();

        assert!(!claims.is_expired_at(at(1_059)));
        assert!(claims.is_expired_at(at(1_060)));
        assert!(claims.is_expired_at(at(1_061)));
    }
}
