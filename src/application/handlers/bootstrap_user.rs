//! BootstrapUser - Command handler that seeds the first account at startup.
//!
//! Every user-management route sits behind the session gate, so an empty
//! database has no way in. When bootstrap credentials are configured, this
//! creates that account unless a user with the email already exists.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::{DomainError, IdGenerator};
use crate::domain::records::User;
use crate::ports::{RecordStore, SessionStore};

/// Command to ensure the bootstrap account exists.
#[derive(Debug)]
pub struct BootstrapUserCommand {
    pub email: String,
    pub password: SecretString,
}

/// What the handler did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapUserResult {
    Created { user_id: String },
    AlreadyPresent { user_id: String },
}

/// Handler for the bootstrap account.
pub struct BootstrapUserHandler {
    sessions: Arc<dyn SessionStore>,
    users: Arc<dyn RecordStore<User>>,
    ids: Arc<IdGenerator>,
}

impl BootstrapUserHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        users: Arc<dyn RecordStore<User>>,
        ids: Arc<IdGenerator>,
    ) -> Self {
        Self {
            sessions,
            users,
            ids,
        }
    }

    pub async fn handle(&self, cmd: BootstrapUserCommand) -> Result<BootstrapUserResult, DomainError> {
        if cmd.email.trim().is_empty() || cmd.password.expose_secret().is_empty() {
            return Err(DomainError::validation(
                "bootstrap email and password must be non-empty",
            ));
        }

        // 1. Leave an existing account alone, password included
        match self.sessions.find_user_by_email(&cmd.email).await {
            Ok(existing) => {
                return Ok(BootstrapUserResult::AlreadyPresent {
                    user_id: existing.id,
                })
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        // 2. Create it; the store hashes the password
        let mut user = User::new("Administrator", cmd.email, cmd.password.expose_secret().as_str());
        user.id = self.ids.next_id();
        let created = self.users.create(user).await?;

        Ok(BootstrapUserResult::Created {
            user_id: created.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::auth::fast_credentials;
    use crate::domain::foundation::ErrorCode;

    fn handler(store: &Arc<InMemoryStore>) -> BootstrapUserHandler {
        BootstrapUserHandler::new(store.clone(), store.clone(), Arc::new(IdGenerator::new()))
    }

    fn command(email: &str, password: &str) -> BootstrapUserCommand {
        BootstrapUserCommand {
            email: email.to_string(),
            password: SecretString::new(password.to_string()),
        }
    }

    #[tokio::test]
    async fn creates_user_with_hashed_password() {
        let store = Arc::new(InMemoryStore::new(fast_credentials()));
        let result = handler(&store)
            .handle(command("admin@example.com", "change-me"))
            .await
            .unwrap();

        let BootstrapUserResult::Created { user_id } = result else {
            panic!("expected a new user, got {:?}", result);
        };
        let user = store.find_user_by_email("admin@example.com").await.unwrap();
        assert_eq!(user.id, user_id);
        assert!(user.password.is_empty());
        assert!(fast_credentials().verify(&user.password_hash, "change-me").is_ok());
    }

    #[tokio::test]
    async fn second_run_leaves_existing_user_alone() {
        let store = Arc::new(InMemoryStore::new(fast_credentials()));
        let handler = handler(&store);
        handler.handle(command("admin@example.com", "first")).await.unwrap();
        let before = store.find_user_by_email("admin@example.com").await.unwrap();

        let result = handler.handle(command("admin@example.com", "second")).await.unwrap();

        assert_eq!(
            result,
            BootstrapUserResult::AlreadyPresent {
                user_id: before.id.clone()
            }
        );
        let after = store.find_user_by_email("admin@example.com").await.unwrap();
        assert_eq!(after.password_hash, before.password_hash);
    }

    #[tokio::test]
    async fn empty_credentials_are_rejected() {
        let store = Arc::new(InMemoryStore::new(fast_credentials()));
        let err = handler(&store).handle(command("admin@example.com", "")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
