//! The capability every persisted record shape shares.
//!
//! The generic store and the HTTP route binder only ever see this trait:
//! an identifier getter/setter, a zero-value constructor (`Default`), and a
//! few optional hooks for uniqueness and secret handling.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A persisted record shape with a string identifier.
///
/// # Secret hooks
///
/// Shapes that accept a write-only plaintext secret (only `User` today)
/// override [`Record::take_plaintext_secret`], [`Record::store_secret_hash`]
/// and [`Record::retain_secrets_from`]. Stores call the first two right
/// before persisting; the update path calls the third so that an update
/// without a new secret keeps the stored hash.
pub trait Record:
    Clone + Default + Serialize + DeserializeOwned + Send + Sync + Unpin + 'static
{
    /// Lowercase singular name used in messages and as the in-memory table key.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    /// Field/value pairs the store must keep unique across all records of
    /// this shape.
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Removes and returns a non-empty plaintext secret awaiting hashing.
    fn take_plaintext_secret(&mut self) -> Option<String> {
        None
    }

    fn store_secret_hash(&mut self, _hash: String) {}

    /// Copies stored secret material from `previous` when this record
    /// carries no replacement.
    fn retain_secrets_from(&mut self, _previous: &Self) {}
}

/// Implements [`Record`] for a struct with a plain `id: String` field and
/// no unique keys or secrets.
///
/// ```ignore
/// impl_record!(Company, "company");
/// ```
#[macro_export]
macro_rules! impl_record {
    ($name:ident, $kind:literal) => {
        impl $crate::domain::foundation::Record for $name {
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}
