//! Foundation module - Shared domain primitives.
//!
//! Contains the error taxonomy, the record capability trait, and the
//! identifier generator that every record shape relies on.

mod errors;
mod ids;
mod record;

pub use errors::{DomainError, ErrorCode};
pub use ids::{IdGenerator, ID_LENGTH};
pub use record::Record;
