//! PostgreSQL adapters - Database implementations for the storage ports.
//!
//! A single `PostgresStore` implements `RecordStore<T>` for every record
//! shape plus `SessionStore` and `ReportReader`. Table mappings live in
//! `records`; the schema itself ships under `migrations/` and is applied by
//! an external runner before the server starts.

mod errors;
mod record_store;
mod records;
mod report_reader;
mod session_store;

pub use record_store::PostgresStore;
pub use records::PgRecord;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;

/// Opens a connection pool sized and timed per `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(Some(config.idle_timeout()))
        .max_lifetime(Some(config.max_lifetime()))
        .connect(&config.url)
        .await
}
