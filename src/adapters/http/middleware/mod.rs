//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `auth` - Bearer-token gate and the `RequireAuth` extractor

pub mod auth;

pub use auth::{bearer_token, require_session, RequireAuth, SessionGateState};
