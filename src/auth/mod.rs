//! Password hashing for user accounts.
//!
//! bcrypt is CPU-bound, so the async entry points move the work onto the
//! blocking thread pool.

use thiserror::Error;

use crate::config;

/// bcrypt only reads this many bytes of input
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password is longer than 72 bytes")]
    TooLong,

    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Password task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hash with a fresh random salt at the given work factor
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, PasswordError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(PasswordError::TooLong);
    }
    Ok(bcrypt::hash(password, cost)?)
}

/// Check a plain password against a stored hash.
/// A malformed stored hash counts as a mismatch rather than an error,
/// and so does a password too long to have been hashed in full.
pub fn verify_password_sync(password: &str, hash: &str) -> bool {
    if password.len() > MAX_PASSWORD_BYTES {
        return false;
    }
    match bcrypt::verify(password, hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!("Stored password hash could not be verified: {}", e);
            false
        }
    }
}

pub async fn hash_password(password: String) -> Result<String, PasswordError> {
    let cost = config::config().security.bcrypt_cost;
    tokio::task::spawn_blocking(move || hash_password_with_cost(&password, cost)).await?
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    Ok(tokio::task::spawn_blocking(move || verify_password_sync(&password, &hash)).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn hash_is_not_the_password() {
        let hash = hash_password_with_cost("rahasia123", TEST_COST).unwrap();
        assert_ne!(hash, "rahasia123");
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password_with_cost("rahasia123", TEST_COST).unwrap();
        let b = hash_password_with_cost("rahasia123", TEST_COST).unwrap();
        assert_ne!(a, b);
        assert!(verify_password_sync("rahasia123", &a));
        assert!(verify_password_sync("rahasia123", &b));
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password_with_cost("rahasia123", TEST_COST).unwrap();
        assert!(!verify_password_sync("rahasia124", &hash));
        assert!(!verify_password_sync("", &hash));
    }

    #[test]
    fn passwords_past_72_bytes_are_refused() {
        let base = "a".repeat(MAX_PASSWORD_BYTES);
        let hash = hash_password_with_cost(&base, TEST_COST).unwrap();
        assert!(verify_password_sync(&base, &hash));

        // same first 72 bytes, different tail
        assert!(!verify_password_sync(&format!("{}tail", base), &hash));
        assert!(matches!(
            hash_password_with_cost(&format!("{}b", base), TEST_COST),
            Err(PasswordError::TooLong)
        ));
    }

    #[test]
    fn malformed_hash_is_a_mismatch() {
        assert!(!verify_password_sync("rahasia123", "not-a-bcrypt-hash"));
    }

    #[tokio::test]
    async fn async_helpers_round_trip() {
        let hash = hash_password("rahasia123".to_string()).await.unwrap();
        assert!(verify_password("rahasia123".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("salah".to_string(), hash).await.unwrap());
    }
}
