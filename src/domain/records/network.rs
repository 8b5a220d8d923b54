//! Companies and the retail points they own.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub id: String,
    pub name: String,
}

/// A store location belonging to a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetailPoint {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub address: String,
}

crate::impl_record!(Company, "company");
crate::impl_record!(RetailPoint, "retail point");
