//! Generic record persistence port.
//!
//! One trait serves every record shape. Adapters implement it once,
//! generically, for all shapes they know how to map.
//!
//! # Cancellation
//!
//! Every method returns a future that owns its I/O. Dropping the future
//! (client disconnect, request deadline) aborts the underlying query.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Record};

/// Create/read/update/list/delete over one record shape.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Persists a new record and returns it as stored.
    ///
    /// A pending plaintext secret is hashed before the write.
    ///
    /// # Errors
    ///
    /// - `Conflict` on a duplicate identifier or unique key
    /// - `DatabaseError` / `Timeout` when the backend is unavailable
    async fn create(&self, record: T) -> Result<T, DomainError>;

    /// Replaces every field of an existing record.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record has this identifier
    /// - `Conflict` on a unique key violation
    async fn update(&self, record: T) -> Result<T, DomainError>;

    /// # Errors
    ///
    /// - `NotFound` if no record has this identifier
    async fn find_by_id(&self, id: &str) -> Result<T, DomainError>;

    /// All records of this shape, in no particular order.
    async fn list(&self) -> Result<Vec<T>, DomainError>;

    /// Deletes a record. Deleting an unknown identifier succeeds.
    async fn delete_by_id(&self, id: &str) -> Result<(), DomainError>;
}
