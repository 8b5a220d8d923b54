//! Password hashing and verification.
//!
//! Hashes are argon2id PHC strings (`$argon2id$v=19$...`), salted per hash.
//! The async helpers move the CPU-bound work onto the blocking pool so a
//! login or user write never stalls other requests on the runtime.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use thiserror::Error;

use crate::domain::foundation::{DomainError, Record};

/// Errors raised by [`CredentialStore`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("stored password hash is malformed")]
    MalformedHash,

    #[error("password does not match")]
    Mismatch,
}

/// Hashes and verifies user passwords.
#[derive(Clone)]
pub struct CredentialStore {
    argon2: Argon2<'static>,
}

impl CredentialStore {
    /// Creates a store with explicit argon2 cost parameters.
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hashes a plaintext password with a fresh random salt.
    pub fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CredentialError::Hash(e.to_string()))
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// The comparison inside argon2 is constant-time.
    pub fn verify(&self, hash: &str, plaintext: &str) -> Result<(), CredentialError> {
        let parsed = PasswordHash::new(hash).map_err(|_| CredentialError::MalformedHash)?;
        self.argon2
            .verify_password(plaintext.as_bytes(), &parsed)
            .map_err(|_| CredentialError::Mismatch)
    }

    /// [`CredentialStore::hash`] on the blocking pool.
    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, DomainError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.hash(&plaintext))
            .await
            .map_err(|e| DomainError::internal(format!("password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(e.to_string()))
    }

    /// [`CredentialStore::verify`] on the blocking pool; `true` on match.
    pub async fn verify_blocking(&self, hash: String, plaintext: String) -> Result<bool, DomainError> {
        let store = self.clone();
        let outcome = tokio::task::spawn_blocking(move || store.verify(&hash, &plaintext))
            .await
            .map_err(|e| DomainError::internal(format!("password verification task failed: {}", e)))?;
        Ok(outcome.is_ok())
    }

    /// Replaces a record's pending plaintext secret with its hash.
    ///
    /// Records without a pending secret are left untouched.
    pub async fn seal<T: Record>(&self, record: &mut T) -> Result<(), DomainError> {
        if let Some(plaintext) = record.take_plaintext_secret() {
            let hash = self.hash_blocking(plaintext).await?;
            record.store_secret_hash(hash);
        }
        Ok(())
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::with_params(Params::default())
    }
}

#[cfg(test)]
pub(crate) fn fast_credentials() -> CredentialStore {
    let params = Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None)
        .expect("minimum argon2 params are valid");
    CredentialStore::with_params(params)
}
