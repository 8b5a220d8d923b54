//! Product catalog: brands, categories and products.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub id: String,
    pub name: String,
}

/// A product category.
///
/// Categories form a tree through `parent_id`. Nothing prevents cycles;
/// callers that walk the tree must guard against them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub brand_id: String,
    pub category_id: String,
}

crate::impl_record!(Brand, "brand");
crate::impl_record!(Category, "category");

impl Record for Product {
    const KIND: &'static str = "product";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![("sku", self.sku.clone())]
    }
}
