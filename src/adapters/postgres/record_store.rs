//! PostgreSQL implementation of RecordStore.
//!
//! One generic implementation serves every record shape; the SQL is built
//! from each shape's [`PgRecord`] table mapping.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::auth::CredentialStore;
use crate::domain::foundation::DomainError;
use crate::ports::RecordStore;

use super::errors::classify;
use super::records::{insert_sql, select_sql, update_sql, PgRecord};

/// PostgreSQL implementation of every storage port.
#[derive(Clone)]
pub struct PostgresStore {
    pub(super) pool: PgPool,
    credentials: CredentialStore,
}

impl PostgresStore {
    /// Creates a new PostgresStore hashing secrets with `credentials`.
    pub fn new(pool: PgPool, credentials: CredentialStore) -> Self {
        Self { pool, credentials }
    }
}

#[async_trait]
impl<T: PgRecord> RecordStore<T> for PostgresStore {
    async fn create(&self, mut record: T) -> Result<T, DomainError> {
        self.credentials.seal(&mut record).await?;

        let sql = insert_sql::<T>();
        record
            .bind_columns(sqlx::query(&sql).bind(record.id()))
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, &format!("insert {}", T::KIND)))?;

        Ok(record)
    }

    async fn update(&self, mut record: T) -> Result<T, DomainError> {
        self.credentials.seal(&mut record).await?;

        let sql = update_sql::<T>();
        let result = record
            .bind_columns(sqlx::query(&sql).bind(record.id()))
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, &format!("update {}", T::KIND)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(T::KIND, record.id()));
        }

        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<T, DomainError> {
        let sql = select_sql::<T>("WHERE id = $1");
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, &format!("fetch {}", T::KIND)))?
            .ok_or_else(|| DomainError::not_found(T::KIND, id))
    }

    async fn list(&self) -> Result<Vec<T>, DomainError> {
        let sql = select_sql::<T>("ORDER BY id");
        sqlx::query_as::<_, T>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify(e, &format!("list {}", T::KIND)))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, &format!("delete {}", T::KIND)))?;

        Ok(())
    }
}
