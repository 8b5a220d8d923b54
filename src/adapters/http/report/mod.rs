//! HTTP adapter for reports.
//!
//! - `GET /api/reports/companies/:id/visits` - Visit totals for one company

mod handlers;
mod routes;

pub use handlers::ReportState;
pub use routes::report_routes;
