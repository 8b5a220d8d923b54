//! HTTP adapters - REST API implementations.
//!
//! - `auth` - Login, logout and the current user
//! - `entity` - Generic CRUD binding used for every record shape
//! - `report` - Aggregate reports
//! - `middleware` - The bearer-token session gate
//! - `router` - Assembly of the `/api` tree and outer layers

pub mod auth;
pub mod entity;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod report;
mod router;

// Re-export key types for convenience
pub use error::{ApiError, ErrorBody};
pub use router::{api_router, build_app, ApiSettings};
