//! Authentication primitives.
//!
//! - `credentials` - argon2id password hashing ([`CredentialStore`])
//! - `token` - bearer token minting
//! - [`AuthenticatedSession`] - the identity the auth gate attaches to a request

mod credentials;
mod token;

#[cfg(test)]
pub(crate) use credentials::fast_credentials;
pub use credentials::{CredentialError, CredentialStore};
pub use token::{generate_token, TOKEN_LENGTH};

use crate::domain::records::{User, UserToken};

/// The user and token resolved from a request's bearer token.
///
/// Inserted into request extensions by the auth middleware and read back by
/// handlers through the `RequireAuth` extractor.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: User,
    pub token: UserToken,
}

impl AuthenticatedSession {
    pub fn new(user: User, token: UserToken) -> Self {
        Self { user, token }
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}
