//! Application layer - Commands and their handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{BootstrapUserCommand, BootstrapUserHandler, BootstrapUserResult};
