//! Authentication gate and extractor for axum.
//!
//! This module provides:
//! - `require_session` - Layer that resolves a bearer token and injects the session into extensions
//! - `RequireAuth` - Extractor that reads the injected session
//!
//! # Architecture
//!
//! The gate only talks to the `SessionStore` port, so the same middleware
//! runs over PostgreSQL in production and the in-memory store in tests.
//!
//! ```text
//! Request → require_session → injects AuthenticatedSession into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::get, middleware};
//! use std::sync::Arc;
//!
//! let sessions: Arc<dyn SessionStore> = Arc::new(InMemoryStore::new(CredentialStore::default()));
//!
//! let app = Router::new()
//!     .route("/api/auth/me", get(me))
//!     .route_layer(middleware::from_fn_with_state(sessions, require_session));
//!
//! async fn me(RequireAuth(session): RequireAuth) -> String {
//!     format!("Hello, {}!", session.user.name)
//! }
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::ApiError;
use crate::domain::auth::AuthenticatedSession;
use crate::ports::SessionStore;

/// Gate state - the session store tokens are resolved against.
pub type SessionGateState = Arc<dyn SessionStore>;

const BEARER_SCHEME: &str = "bearer";
const BEARER_PREFIX: &str = "bearer ";

/// Extracts the token from an `Authorization` header value.
///
/// The header is trimmed and a leading `Bearer ` (any case) is stripped when
/// present; a bare token is accepted as-is. Returns `None` when nothing is
/// left, including a header holding only the scheme word.
pub fn bearer_token(header: &str) -> Option<&str> {
    let value = header.trim();
    if value.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    let token = match value.get(..BEARER_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(BEARER_PREFIX) => {
            value[BEARER_PREFIX.len()..].trim()
        }
        _ => value,
    };
    (!token.is_empty()).then_some(token)
}

/// Owned token from a request's `Authorization` header, or the rejection.
fn token_from_headers(headers: &HeaderMap) -> Result<String, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ApiError::unauthorized("missing authorization header"))?;

    bearer_token(header)
        .map(str::to_owned)
        .ok_or_else(|| ApiError::unauthorized("missing bearer token"))
}

/// Authentication middleware for protected route groups.
///
/// This middleware:
/// 1. Rejects requests without a non-blank `Authorization` header
/// 2. Extracts the bearer token, rejecting an empty one
/// 3. Resolves the token through the `SessionStore` port
/// 4. On success, injects `AuthenticatedSession` into request extensions
///
/// Unknown or expired tokens, and tokens whose user is gone, are 401.
/// Any other store failure is a 500 carrying the store's message.
pub async fn require_session(
    State(sessions): State<SessionGateState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match token_from_headers(request.headers()) {
        Ok(token) => token,
        Err(rejection) => return rejection.into_response(),
    };

    match sessions.find_token(&token).await {
        Ok(session) => {
            tracing::debug!(user_id = %session.user_id(), "request authenticated");
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        Err(e) if e.is_not_found() => {
            tracing::debug!(reason = %e.message(), "token rejected");
            ApiError::unauthorized("invalid or expired token").into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Extractor that requires an authenticated session.
///
/// Only meaningful behind [`require_session`]; without it every request is
/// rejected with 401.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireAuth(session): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", session.user.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedSession);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedSession>()
                .cloned()
                .map(RequireAuth)
                .ok_or_else(|| ApiError::unauthorized("authentication required"))
        })
    }
}
