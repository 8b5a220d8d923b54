//! Application users.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Record;

/// A user who can log in and record visits.
///
/// `password` is write-only: accepted on input, never serialized, and
/// replaced by `password_hash` before the record is persisted. The hash
/// itself never leaves the server.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip)]
    pub password_hash: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            password_hash: String::new(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("password_hash", &"[redacted]")
            .finish()
    }
}

impl Record for User {
    const KIND: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![("email", self.email.clone())]
    }

    fn take_plaintext_secret(&mut self) -> Option<String> {
        if self.password.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.password))
        }
    }

    fn store_secret_hash(&mut self, hash: String) {
        self.password_hash = hash;
    }

    fn retain_secrets_from(&mut self, previous: &Self) {
        if self.password.is_empty() {
            self.password_hash = previous.password_hash.clone();
        }
    }
}
