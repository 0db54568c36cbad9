//! Password hashing behind a trait so tests can use a cheap work factor.

use crate::errors::DomainError;

/// Hashes and checks account passwords
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, DomainError>;

    /// `Ok(false)` for a mismatch; `Err` only when the stored hash is unusable
    fn verify(&self, hash: &str, plain: &str) -> Result<bool, DomainError>;
}

/// bcrypt implementation
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// `cost` is clamped into the range bcrypt accepts (4..=31)
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(4, 31),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, DomainError> {
        bcrypt::hash(plain, self.cost)
            .map_err(|e| DomainError::internal(format!("password hashing failed: {}", e)))
    }

    fn verify(&self, hash: &str, plain: &str) -> Result<bool, DomainError> {
        bcrypt::verify(plain, hash)
            .map_err(|e| DomainError::internal(format!("stored password hash is invalid: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = BcryptPasswordHasher::new(4);
        let hash = hasher.hash("secret1").unwrap();

        assert_ne!(hash, "secret1");
        assert!(hasher.verify(&hash, "secret1").unwrap());
        assert!(!hasher.verify(&hash, "wrong").unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = BcryptPasswordHasher::new(4);
        assert_ne!(hasher.hash("secret1").unwrap(), hasher.hash("secret1").unwrap());
    }

    #[test]
    fn test_invalid_stored_hash_is_internal() {
        let hasher = BcryptPasswordHasher::new(4);
        let result = hasher.verify("not-a-bcrypt-hash", "secret1");
        assert!(matches!(result, Err(DomainError::Internal { .. })));
    }

    #[test]
    fn test_cost_is_clamped() {
        assert_eq!(BcryptPasswordHasher::new(1).cost(), 4);
        assert_eq!(BcryptPasswordHasher::new(12).cost(), 12);
    }
}
