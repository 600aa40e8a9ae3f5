//! Password value object.
//!
//! User passwords are stored as Argon2 hashes, never as the submitted text.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Hashed password.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// No strength rules: presence is checked by request validation.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Hash a password using Argon2.
    fn hash(plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plain_text() {
        let hash = Password::new("use-the-force").unwrap().into_string();
        assert_ne!(hash, "use-the-force");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_same_text_gets_a_fresh_salt() {
        let first = Password::new("use-the-force").unwrap().into_string();
        let second = Password::new("use-the-force").unwrap().into_string();
        assert_ne!(first, second);
    }

    #[test]
    fn test_short_passwords_are_accepted() {
        assert!(Password::new("r2").is_ok());
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("use-the-force").unwrap();
        let debug = format!("{:?}", password);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(&password.into_string()));
    }
}
