//! Session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Record;

/// An opaque bearer token granting its holder a session as `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserToken {
    pub id: String,
    pub user_id: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl UserToken {
    pub fn new(
        id: String,
        user_id: impl Into<String>,
        token: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            token: token.into(),
            created_at: Utc::now(),
            expires_at,
        }
    }

    /// A token without an expiry never expires.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }
}

impl Default for UserToken {
    fn default() -> Self {
        Self {
            id: String::new(),
            user_id: String::new(),
            token: String::new(),
            created_at: Utc::now(),
            expires_at: None,
        }
    }
}

impl Record for UserToken {
    const KIND: &'static str = "token";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![("token", self.token.clone())]
    }
}
