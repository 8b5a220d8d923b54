//! PostgreSQL implementation of ReportReader.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::report::CompanyVisitSummary;
use crate::ports::ReportReader;

use super::errors::classify;
use super::PostgresStore;

#[async_trait]
impl ReportReader for PostgresStore {
    async fn company_visit_summary(
        &self,
        company_id: &str,
    ) -> Result<CompanyVisitSummary, DomainError> {
        let (total_visits,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(v.id)::BIGINT
            FROM visits v
            JOIN retail_points rp ON rp.id = v.retail_point_id
            WHERE rp.company_id = $1
            "#,
        )
        .bind(company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "count company visits"))?;

        // Items are reached through their visit so orphaned rows are ignored.
        let (total_items, total_amount): (i64, f64) = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(vi.present_quantity), 0)::BIGINT,
                COALESCE(SUM(vi.present_quantity * vi.price), 0)::DOUBLE PRECISION
            FROM visit_items vi
            JOIN visits v ON v.id = vi.visit_id
            JOIN retail_points rp ON rp.id = v.retail_point_id
            WHERE rp.company_id = $1
            "#,
        )
        .bind(company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, "sum company visit items"))?;

        Ok(CompanyVisitSummary {
            company_id: company_id.to_string(),
            total_visits,
            total_items,
            total_amount,
        })
    }
}
