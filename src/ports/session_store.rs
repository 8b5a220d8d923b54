//! Session persistence port.
//!
//! Users and tokens are ordinary records; this port adds the lookups the
//! login flow and the auth gate need.

use async_trait::async_trait;

use crate::domain::auth::AuthenticatedSession;
use crate::domain::foundation::DomainError;
use crate::domain::records::{User, UserToken};

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// # Errors
    ///
    /// - `NotFound` if no user has this email
    async fn find_user_by_email(&self, email: &str) -> Result<User, DomainError>;

    /// # Errors
    ///
    /// - `Conflict` if the token string is already in use
    async fn create_token(&self, token: UserToken) -> Result<UserToken, DomainError>;

    /// Resolves a token string to its token and owning user.
    ///
    /// An expired token is deleted by the lookup that discovers it.
    ///
    /// # Errors
    ///
    /// `NotFound` when the token is unknown, expired, or its user no longer
    /// exists; any other code is a backend failure.
    async fn find_token(&self, token: &str) -> Result<AuthenticatedSession, DomainError>;

    /// Deletes a token. Deleting an unknown token succeeds.
    async fn delete_token(&self, token: &str) -> Result<(), DomainError>;
}
