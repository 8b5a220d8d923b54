//! Record identifier generation.
//!
//! Identifiers are ULIDs: 26 Crockford base32 characters, a 48-bit
//! millisecond timestamp followed by 80 bits of randomness. Identifiers
//! minted within the same millisecond increment the random part of the
//! previous one, so they stay unique and ordered under concurrent use.

use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

use ulid::{Generator, Ulid};

/// Length of every generated identifier.
pub const ID_LENGTH: usize = 26;

/// Monotonic identifier generator.
///
/// Constructed once at startup and shared (behind an `Arc`) with every
/// component that assigns identifiers.
pub struct IdGenerator {
    inner: Mutex<Generator>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Generator::new()),
        }
    }

    /// Mints a new identifier for the current instant.
    pub fn next_id(&self) -> String {
        self.next_id_at(SystemTime::now())
    }

    /// Mints a new identifier for the given instant.
    ///
    /// If `at` is not later than the previous identifier's millisecond, the
    /// previous identifier is incremented instead.
    pub fn next_id_at(&self, at: SystemTime) -> String {
        let mut generator = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match generator.generate_from_datetime(at) {
            Ok(id) => id.to_string(),
            Err(err) => {
                // 2^80 ids in one millisecond; fall back to a fresh random id.
                tracing::warn!(error = %err, "monotonic id space exhausted");
                Ulid::from_datetime(at).to_string()
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
