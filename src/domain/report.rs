//! Cross-entity reporting values.

use serde::{Deserialize, Serialize};

/// Visit statistics for one company.
///
/// `total_items` sums shelf (present) quantities; `total_amount` sums
/// present quantity times unit price over the same visit items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyVisitSummary {
    pub company_id: String,
    pub total_visits: i64,
    pub total_items: i64,
    pub total_amount: f64,
}

impl CompanyVisitSummary {
    /// The summary of a company with no visits.
    pub fn empty(company_id: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            total_visits: 0,
            total_items: 0,
            total_amount: 0.0,
        }
    }
}
