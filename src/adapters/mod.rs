//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL storage (production)
//! - `memory` - Process-local storage with the same semantics (tests, local runs)
//! - `http` - The axum REST API

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
