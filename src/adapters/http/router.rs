//! Application router assembly.
//!
//! Wires every route group onto one storage backend:
//!
//! ```text
//! /api/auth/login                  public
//! /api/auth/{logout,me}            ┐
//! /api/{users,companies,...}       ├ behind require_session
//! /api/reports/companies/:id/...   ┘
//! /api/*                           JSON 404
//! ```

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::domain::auth::CredentialStore;
use crate::domain::foundation::{IdGenerator, Record};
use crate::domain::records::{
    Brand, Category, Company, Product, RetailPoint, User, Visit, VisitItem,
};
use crate::ports::{RecordStore, ReportReader, Storage};

use super::auth::{protected_auth_routes, public_auth_routes, AuthState};
use super::entity::{entity_routes, EntityState};
use super::error::ApiError;
use super::middleware::{require_session, SessionGateState};
use super::report::{report_routes, ReportState};

/// Everything the router needs besides the storage backend.
#[derive(Clone)]
pub struct ApiSettings {
    pub ids: Arc<IdGenerator>,
    pub credentials: CredentialStore,
    /// Lifetime of issued tokens; `None` issues non-expiring tokens.
    pub token_ttl: Option<Duration>,
    pub request_timeout: Duration,
    /// Origins allowed to call the API cross-origin; empty allows none.
    pub cors_origins: Vec<String>,
}

impl ApiSettings {
    pub fn new(ids: Arc<IdGenerator>, credentials: CredentialStore) -> Self {
        Self {
            ids,
            credentials,
            token_ttl: None,
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// Routes under `/api`, without the `/api` prefix and without outer layers.
pub fn api_router<B: Storage + 'static>(store: Arc<B>, settings: &ApiSettings) -> Router {
    let sessions: SessionGateState = store.clone();
    let reports: Arc<dyn ReportReader> = store.clone();
    let auth_state = AuthState {
        sessions: sessions.clone(),
        credentials: settings.credentials.clone(),
        ids: settings.ids.clone(),
        token_ttl: settings.token_ttl,
    };

    let protected = Router::new()
        .merge(entity::<User, B>("users", &store, settings))
        .merge(entity::<Company, B>("companies", &store, settings))
        .merge(entity::<RetailPoint, B>("retail-points", &store, settings))
        .merge(entity::<Brand, B>("brands", &store, settings))
        .merge(entity::<Category, B>("categories", &store, settings))
        .merge(entity::<Product, B>("products", &store, settings))
        .merge(entity::<Visit, B>("visits", &store, settings))
        .merge(entity::<VisitItem, B>("visit-items", &store, settings))
        .merge(protected_auth_routes().with_state(auth_state.clone()))
        .merge(report_routes().with_state(ReportState { reports }))
        .route_layer(middleware::from_fn_with_state(sessions, require_session));

    Router::new()
        .merge(public_auth_routes().with_state(auth_state))
        .merge(protected)
}

/// The complete application: `/api` routes plus tracing, CORS and
/// per-request timeout layers.
pub fn build_app<B: Storage + 'static>(store: Arc<B>, settings: ApiSettings) -> Router {
    Router::new()
        .nest("/api", api_router(store, &settings))
        .fallback(not_found)
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn entity<T, B>(prefix: &str, store: &Arc<B>, settings: &ApiSettings) -> Router
where
    T: Record,
    B: RecordStore<T> + 'static,
{
    let store: Arc<dyn RecordStore<T>> = store.clone();
    entity_routes::<T>(prefix, EntityState::new(store, settings.ids.clone()))
}

/// Unmatched paths: JSON under `/api`, bare 404 elsewhere.
async fn not_found(uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        ApiError::not_found("not found").into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(%origin, ?err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
