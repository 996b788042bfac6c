use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a plain text password into an argon2 PHC string.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash including algorithm parameters and salt
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Checks a plain text password against a stored argon2 hash.
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Runs [`hash_password`] on the blocking pool.
pub async fn hash_password_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
}

/// Runs [`verify_password`] on the blocking pool.
///
/// A task that fails to complete never matches.
pub async fn verify_password_blocking(password: String, hash: String) -> bool {
    match tokio::task::spawn_blocking(move || verify_password(&password, &hash)).await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!(error = %e, "Password verification task failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_hashed_password() {
        let hash = hash_password("Sup3r$ecret").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("Sup3r$ecret", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn rejects_malformed_hash() {
        assert!(!verify_password("Sup3r$ecret", "not-a-hash"));
    }

    #[tokio::test]
    async fn blocking_helpers_agree_with_sync_ones() {
        let hash = hash_password_blocking("Sup3r$ecret".to_string())
            .await
            .unwrap();

        assert!(verify_password("Sup3r$ecret", &hash));
        assert!(verify_password_blocking("Sup3r$ecret".to_string(), hash.clone()).await);
        assert!(!verify_password_blocking("wrong".to_string(), hash).await);
    }
}
