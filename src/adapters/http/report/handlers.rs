//! HTTP handlers for report endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::ports::ReportReader;

/// Dependencies of the report endpoints.
#[derive(Clone)]
pub struct ReportState {
    pub reports: Arc<dyn ReportReader>,
}

/// GET /api/reports/companies/:id/visits - Visit totals for one company
///
/// Unknown companies yield an all-zero summary rather than 404.
pub async fn company_visit_summary(
    State(state): State<ReportState>,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state.reports.company_visit_summary(&company_id).await?;
    Ok(Json(summary))
}
