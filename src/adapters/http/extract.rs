//! JSON body extraction with API-shaped rejections.
//!
//! axum's own `Json` extractor rejects with plain-text bodies and a 415/422
//! spread of statuses. Here every undecodable body is a 400 carrying the
//! decoder's message as `{"error": ...}`.

use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Request body decoded as JSON into `T`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        decode(&bytes).map(ApiJson)
    }
}

/// Decodes a buffered body, for handlers that must do work before decoding.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::bad_request(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::Company;
    use axum::http::StatusCode;

    #[test]
    fn decode_accepts_partial_records() {
        let company: Company = decode(br#"{"name":"Acme"}"#).unwrap();
        assert_eq!(company.name, "Acme");
        assert!(company.id.is_empty());
    }

    #[test]
    fn decode_rejects_malformed_json_with_400() {
        let err = decode::<Company>(b"{not json").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(!err.message().is_empty());
    }

    #[test]
    fn decode_rejects_empty_body() {
        let err = decode::<Company>(b"").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn decode_rejects_wrong_field_types() {
        let err = decode::<Company>(br#"{"name": 42}"#).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn extractor_decodes_request_body() {
        let request = Request::builder()
            .body(axum::body::Body::from(r#"{"id":"c1","name":"Acme"}"#))
            .unwrap();
        let ApiJson(company) = ApiJson::<Company>::from_request(request, &()).await.unwrap();
        assert_eq!(company.id, "c1");
    }
}
