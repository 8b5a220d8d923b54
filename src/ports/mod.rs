//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecordStore<T>` - Generic CRUD over any record shape
//! - `SessionStore` - User lookup by email and token lifecycle
//! - `ReportReader` - Aggregate reports
//! - `Storage` - Everything the HTTP layer needs from one backend

mod record_store;
mod report_reader;
mod session_store;

pub use record_store::RecordStore;
pub use report_reader::ReportReader;
pub use session_store::SessionStore;

use crate::domain::records::{
    Brand, Category, Company, Product, RetailPoint, User, Visit, VisitItem,
};

/// A backend that can serve the whole API.
///
/// Blanket-implemented for any type providing every port, so adapters never
/// implement it by hand.
pub trait Storage:
    RecordStore<User>
    + RecordStore<Company>
    + RecordStore<RetailPoint>
    + RecordStore<Brand>
    + RecordStore<Category>
    + RecordStore<Product>
    + RecordStore<Visit>
    + RecordStore<VisitItem>
    + SessionStore
    + ReportReader
{
}

impl<S> Storage for S where
    S: RecordStore<User>
        + RecordStore<Company>
        + RecordStore<RetailPoint>
        + RecordStore<Brand>
        + RecordStore<Category>
        + RecordStore<Product>
        + RecordStore<Visit>
        + RecordStore<VisitItem>
        + SessionStore
        + ReportReader
{
}
