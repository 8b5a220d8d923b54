//! Read-only reporting port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::report::CompanyVisitSummary;

#[async_trait]
pub trait ReportReader: Send + Sync {
    /// Visit count, shelf item count and shelf amount for a company.
    ///
    /// An unknown company yields an all-zero summary. The visit count and
    /// the item totals are read separately, without a shared snapshot.
    async fn company_visit_summary(
        &self,
        company_id: &str,
    ) -> Result<CompanyVisitSummary, DomainError>;
}
