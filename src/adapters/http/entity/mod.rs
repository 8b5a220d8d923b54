//! Generic CRUD binding for record shapes.
//!
//! One set of handlers serves every record shape through the
//! `RecordStore<T>` port:
//! - `POST /{prefix}` - Create, assigning an identifier when absent (201)
//! - `GET /{prefix}` - List every record (200)
//! - `GET /{prefix}/:id` - Fetch one record (200, 404)
//! - `PUT /{prefix}/:id` - Replace an existing record (200, 404)
//! - `DELETE /{prefix}/:id` - Delete, idempotently (204)

mod handlers;
mod routes;

pub use handlers::EntityState;
pub use routes::entity_routes;
