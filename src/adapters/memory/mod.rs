//! In-memory storage adapter.
//!
//! Implements every port over process-local tables with the same observable
//! semantics as the PostgreSQL adapter: duplicate identifiers and unique
//! keys are rejected, deletes are idempotent, expired tokens are removed by
//! the lookup that finds them. Intended for tests and local experiments;
//! nothing survives a restart.

mod store;

pub use store::InMemoryStore;
