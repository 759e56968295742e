use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::thread_rng;

use crate::error::AppError;

pub const MIN_PASSWORD_LEN: usize = 8;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::bad_request(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    hash_secret(password)
}

/// argon2 hash for secrets with no length policy, such as security answers.
pub fn hash_secret(secret: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut thread_rng());
    let hash = Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|err| AppError::internal(format!("Hashing failed: {err}")))?
        .to_string();
    Ok(hash)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash).map_err(|err| {
        tracing::error!(error = %err, "stored hash is not a valid PHC string");
        AppError::internal("Stored credential is corrupt")
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_passwords() {
        let err = hash_password("corta").expect_err("short password should fail");
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn hashed_password_verifies_only_with_original() {
        let hash = hash_password("esmeralda-2024").expect("hash should succeed");

        assert!(verify_password("esmeralda-2024", &hash).expect("verify should run"));
        assert!(!verify_password("rubí-2024", &hash).expect("verify should run"));
    }

    #[test]
    fn corrupt_hash_is_an_internal_error() {
        let err = verify_password("whatever", "not-a-phc-string").expect_err("should fail");
        assert!(matches!(err, AppError::Internal(_)));
    }
}
