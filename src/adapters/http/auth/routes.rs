//! Axum router configuration for authentication endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{login, logout, me, AuthState};

/// Routes reachable without a token.
///
/// # Routes
/// - `POST /auth/login` - Exchange credentials for a token
pub fn public_auth_routes() -> Router<AuthState> {
    Router::new().route("/auth/login", post(login))
}

/// Routes that must sit behind the session gate.
///
/// # Routes
/// - `POST /auth/logout` - Revoke the presented token
/// - `GET /auth/me` - The authenticated user
pub fn protected_auth_routes() -> Router<AuthState> {
    Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}
