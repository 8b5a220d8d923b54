//! HTTP handlers for authentication endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use secrecy::ExposeSecret;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::middleware::RequireAuth;
use crate::domain::auth::{generate_token, CredentialStore};
use crate::domain::foundation::{DomainError, IdGenerator};
use crate::domain::records::UserToken;
use crate::ports::SessionStore;

use super::dto::{LoginRequest, LoginResponse};

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Dependencies of the authentication endpoints.
#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<dyn SessionStore>,
    pub credentials: CredentialStore,
    pub ids: Arc<IdGenerator>,
    /// Lifetime stamped on new tokens; `None` issues non-expiring tokens.
    pub token_ttl: Option<Duration>,
}

/// POST /api/auth/login - Exchange credentials for a bearer token
///
/// Unknown emails and wrong passwords are indistinguishable to the caller.
pub async fn login(
    State(state): State<AuthState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let user = match state.sessions.find_user_by_email(&request.email).await {
        Ok(user) => user,
        Err(e) if e.is_not_found() => {
            tracing::debug!("login for unknown email");
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS).into());
        }
        Err(e) => return Err(e.into()),
    };

    let matches = state
        .credentials
        .verify_blocking(
            user.password_hash.clone(),
            request.password.expose_secret().clone(),
        )
        .await?;
    if !matches {
        tracing::debug!(user_id = %user.id, "login with wrong password");
        return Err(DomainError::unauthorized(INVALID_CREDENTIALS).into());
    }

    let expires_at = match state.token_ttl {
        Some(ttl) => {
            let ttl = chrono::Duration::from_std(ttl)
                .map_err(|e| DomainError::internal(format!("token ttl out of range: {}", e)))?;
            Some(Utc::now() + ttl)
        }
        None => None,
    };

    let token = UserToken::new(state.ids.next_id(), user.id.as_str(), generate_token(), expires_at);
    let token = state.sessions.create_token(token).await?;
    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(LoginResponse { token: token.token }))
}

/// POST /api/auth/logout - Revoke the token that authenticated this request
pub async fn logout(
    State(state): State<AuthState>,
    RequireAuth(session): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    state.sessions.delete_token(&session.token.token).await?;
    tracing::info!(user_id = %session.user_id(), "user logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/me - The authenticated user
pub async fn me(RequireAuth(session): RequireAuth) -> impl IntoResponse {
    Json(session.user)
}
