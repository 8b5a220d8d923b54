//! HTTP adapter for authentication endpoints.
//!
//! - `POST /api/auth/login` - Exchange email and password for a bearer token
//! - `POST /api/auth/logout` - Revoke the presented token (protected)
//! - `GET /api/auth/me` - The authenticated user (protected)

pub mod dto;
mod handlers;
mod routes;

pub use handlers::AuthState;
pub use routes::{protected_auth_routes, public_auth_routes};
