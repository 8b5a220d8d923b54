//! HTTP DTOs for authentication endpoints.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::adapters::http::error::ApiError;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Credentials presented to `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

impl LoginRequest {
    /// Both fields are required and must be non-empty.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email.trim().is_empty() {
            return Err(ApiError::bad_request("email is required"));
        }
        if self.password.expose_secret().is_empty() {
            return Err(ApiError::bad_request("password is required"));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A freshly issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_requires_both_fields() {
        let missing: Result<LoginRequest, _> = serde_json::from_str(r#"{"email":"a@b.c"}"#);
        assert!(missing.is_err());

        let empty: LoginRequest =
            serde_json::from_str(r#"{"email":"a@b.c","password":""}"#).unwrap();
        assert!(empty.validate().is_err());

        let blank: LoginRequest =
            serde_json::from_str(r#"{"email":"  ","password":"pw"}"#).unwrap();
        assert!(blank.validate().is_err());

        let ok: LoginRequest =
            serde_json::from_str(r#"{"email":"a@b.c","password":"pw"}"#).unwrap();
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn login_request_debug_hides_password() {
        let request: LoginRequest =
            serde_json::from_str(r#"{"email":"a@b.c","password":"hunter2"}"#).unwrap();
        assert!(!format!("{:?}", request).contains("hunter2"));
    }
}
