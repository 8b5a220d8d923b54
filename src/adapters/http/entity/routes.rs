//! Axum router configuration for entity groups.

use axum::{routing::get, Router};

use crate::domain::foundation::Record;

use super::handlers::{
    create_record, delete_record, get_record, list_records, update_record, EntityState,
};

/// Create the CRUD router for one record shape under `/{prefix}`.
///
/// # Routes
/// - `POST /{prefix}` - Create
/// - `GET /{prefix}` - List
/// - `GET /{prefix}/:id` - Fetch
/// - `PUT /{prefix}/:id` - Replace
/// - `DELETE /{prefix}/:id` - Delete
///
/// # Example
///
/// ```ignore
/// let companies = entity_routes::<Company>("companies", EntityState::new(store, ids));
/// let app = Router::new().nest("/api", companies);
/// ```
pub fn entity_routes<T: Record>(prefix: &str, state: EntityState<T>) -> Router {
    let prefix = prefix.trim_matches('/');
    Router::new()
        .route(
            &format!("/{}", prefix),
            get(list_records::<T>).post(create_record::<T>),
        )
        .route(
            &format!("/{}/:id", prefix),
            get(get_record::<T>)
                .put(update_record::<T>)
                .delete(delete_record::<T>),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::error::ErrorBody;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::auth::fast_credentials;
    use crate::domain::foundation::{IdGenerator, ID_LENGTH};
    use crate::domain::records::{Company, User};
    use crate::ports::RecordStore;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde::de::DeserializeOwned;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router<T: Record>(prefix: &str, store: Arc<InMemoryStore>) -> Router {
        let store: Arc<dyn RecordStore<T>> = store;
        entity_routes::<T>(prefix, EntityState::new(store, Arc::new(IdGenerator::new())))
    }

    fn store() -> Arc<InMemoryStore> {
        Arc::new(InMemoryStore::new(fast_credentials()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn json<T: DeserializeOwned>(bytes: &[u8]) -> T {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn create_assigns_identifier_and_returns_201() {
        let app = router::<Company>("companies", store());
        let (status, body) = send(&app, Method::POST, "/companies", r#"{"name":"Acme"}"#).await;
        assert_eq!(status, StatusCode::CREATED);

        let created: Company = json(&body);
        assert_eq!(created.id.len(), ID_LENGTH);
        assert_eq!(created.name, "Acme");

        let (status, body) = send(&app, Method::GET, &format!("/companies/{}", created.id), "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json::<Company>(&body), created);
    }

    #[tokio::test]
    async fn create_honors_caller_identifier() {
        let app = router::<Company>("companies", store());
        let (_, body) = send(&app, Method::POST, "/companies", r#"{"id":"C1","name":"Acme"}"#).await;
        assert_eq!(json::<Company>(&body).id, "C1");
    }

    #[tokio::test]
    async fn create_with_malformed_body_is_400() {
        let app = router::<Company>("companies", store());
        let (status, body) = send(&app, Method::POST, "/companies", "{").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!json::<ErrorBody>(&body).error.is_empty());
    }

    #[tokio::test]
    async fn list_returns_every_record() {
        let app = router::<Company>("companies", store());
        send(&app, Method::POST, "/companies", r#"{"name":"A"}"#).await;
        send(&app, Method::POST, "/companies", r#"{"name":"B"}"#).await;

        let (status, body) = send(&app, Method::GET, "/companies", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json::<Vec<Company>>(&body).len(), 2);
    }

    #[tokio::test]
    async fn get_unknown_is_404() {
        let app = router::<Company>("companies", store());
        let (status, body) = send(&app, Method::GET, "/companies/missing", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json::<ErrorBody>(&body).error.contains("missing"));
    }

    #[tokio::test]
    async fn update_forces_path_identifier() {
        let app = router::<Company>("companies", store());
        send(&app, Method::POST, "/companies", r#"{"id":"C1","name":"Old"}"#).await;

        let (status, body) =
            send(&app, Method::PUT, "/companies/C1", r#"{"id":"other","name":"New"}"#).await;
        assert_eq!(status, StatusCode::OK);
        let updated: Company = json(&body);
        assert_eq!(updated.id, "C1");
        assert_eq!(updated.name, "New");

        let (status, _) = send(&app, Method::GET, "/companies/other", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_unknown_is_404_before_body_is_read() {
        let app = router::<Company>("companies", store());
        let (status, _) = send(&app, Method::PUT, "/companies/nope", "not json").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_with_malformed_body_is_400() {
        let app = router::<Company>("companies", store());
        send(&app, Method::POST, "/companies", r#"{"id":"C1","name":"Old"}"#).await;
        let (status, _) = send(&app, Method::PUT, "/companies/C1", "[").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let app = router::<Company>("companies", store());
        send(&app, Method::POST, "/companies", r#"{"id":"C1","name":"Acme"}"#).await;

        let (first, _) = send(&app, Method::DELETE, "/companies/C1", "").await;
        let (second, _) = send(&app, Method::DELETE, "/companies/C1", "").await;
        let (never, _) = send(&app, Method::DELETE, "/companies/never-existed", "").await;
        assert_eq!(first, StatusCode::NO_CONTENT);
        assert_eq!(second, StatusCode::NO_CONTENT);
        assert_eq!(never, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn user_output_never_carries_password() {
        let app = router::<User>("users", store());
        let (status, body) = send(
            &app,
            Method::POST,
            "/users",
            r#"{"name":"Ana","email":"ana@example.com","password":"pw"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let value: serde_json::Value = json(&body);
        assert!(value.get("password").is_none());
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["email"], "ana@example.com");
    }

    #[tokio::test]
    async fn prefix_slashes_are_normalized() {
        let app = router::<Company>("/companies/", store());
        let (status, _) = send(&app, Method::GET, "/companies", "").await;
        assert_eq!(status, StatusCode::OK);
    }
}
