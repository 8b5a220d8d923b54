//! Axum router configuration for report endpoints.

use axum::{routing::get, Router};

use super::handlers::{company_visit_summary, ReportState};

/// Create the report router.
///
/// # Routes
/// - `GET /reports/companies/:id/visits` - Visit totals for one company
pub fn report_routes() -> Router<ReportState> {
    Router::new().route("/reports/companies/:id/visits", get(company_visit_summary))
}
