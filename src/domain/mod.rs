//! Domain layer containing the record shapes and shared primitives.
//!
//! # Module Organization
//!
//! - `foundation` - Error taxonomy, record capability trait, id generation
//! - `records` - The persisted record shapes
//! - `auth` - Password hashing, token minting, authenticated session
//! - `report` - Aggregate report values

pub mod auth;
pub mod foundation;
pub mod records;
pub mod report;
