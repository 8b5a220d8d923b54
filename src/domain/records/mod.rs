//! Record shapes persisted by the stores.
//!
//! Field names are the snake_case names used both in JSON bodies and as
//! database columns (except `User::password_hash`, stored as `password`).

mod catalog;
mod network;
mod token;
mod user;
mod visit;

pub use catalog::{Brand, Category, Product};
pub use network::{Company, RetailPoint};
pub use token::UserToken;
pub use user::User;
pub use visit::{Visit, VisitItem};
