//! Password hashing helpers around bcrypt

use crate::errors::{DomainError, DomainResult};

/// Hash a plaintext password with bcrypt at the default cost
pub fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| DomainError::internal(format!("password hashing failed: {}", e)))
}

/// Verify a plaintext password against a stored bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, hash)
        .map_err(|e| DomainError::internal(format!("password verification failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("abcd1234").unwrap();
        assert_ne!(hash, "abcd1234");
        assert!(verify_password("abcd1234", &hash).unwrap());
        assert!(!verify_password("abcd12345", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_password("abcd1234", "not-a-bcrypt-hash").is_err());
    }
}
