//! PostgreSQL implementation of SessionStore.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::AuthenticatedSession;
use crate::domain::foundation::{DomainError, ErrorCode, Record};
use crate::domain::records::{User, UserToken};
use crate::ports::{RecordStore, SessionStore};

use super::errors::classify;
use super::records::select_sql;
use super::PostgresStore;

#[async_trait]
impl SessionStore for PostgresStore {
    async fn find_user_by_email(&self, email: &str) -> Result<User, DomainError> {
        let sql = select_sql::<User>("WHERE email = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, "fetch user by email"))?
            .ok_or_else(|| DomainError::not_found(User::KIND, email))
    }

    async fn create_token(&self, token: UserToken) -> Result<UserToken, DomainError> {
        RecordStore::<UserToken>::create(self, token).await
    }

    async fn find_token(&self, token: &str) -> Result<AuthenticatedSession, DomainError> {
        let sql = select_sql::<UserToken>("WHERE token = $1");
        let found = sqlx::query_as::<_, UserToken>(&sql)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, "fetch token"))?
            .ok_or_else(|| DomainError::new(ErrorCode::NotFound, "token not found"))?;

        if found.is_expired_at(Utc::now()) {
            RecordStore::<UserToken>::delete_by_id(self, &found.id).await?;
            return Err(DomainError::new(ErrorCode::NotFound, "token expired"));
        }

        let user = RecordStore::<User>::find_by_id(self, &found.user_id).await?;
        Ok(AuthenticatedSession::new(user, found))
    }

    async fn delete_token(&self, token: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM user_tokens WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, "delete token"))?;

        Ok(())
    }
}
