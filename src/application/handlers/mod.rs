//! Command handlers.

mod bootstrap_user;

pub use bootstrap_user::{BootstrapUserCommand, BootstrapUserHandler, BootstrapUserResult};
