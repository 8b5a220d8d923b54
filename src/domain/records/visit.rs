//! Field visits and the shelf observations recorded during them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A visit by a user to a retail point.
///
/// The zero value stamps `visited_at` with the current time, so a visit
/// created without a timestamp is dated at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visit {
    pub id: String,
    pub user_id: String,
    pub retail_point_id: String,
    pub visited_at: DateTime<Utc>,
    pub notes: String,
}

impl Default for Visit {
    fn default() -> Self {
        Self {
            id: String::new(),
            user_id: String::new(),
            retail_point_id: String::new(),
            visited_at: Utc::now(),
            notes: String::new(),
        }
    }
}

/// One product observed during a visit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisitItem {
    pub id: String,
    pub visit_id: String,
    pub product_id: String,
    /// Units on the shelf.
    pub present_quantity: i32,
    /// Units in the back store.
    pub store_quantity: i32,
    /// Unit price at the time of the visit.
    pub price: f64,
}

impl VisitItem {
    /// Shelf value of this observation.
    pub fn amount(&self) -> f64 {
        f64::from(self.present_quantity) * self.price
    }
}

crate::impl_record!(Visit, "visit");
crate::impl_record!(VisitItem, "visit item");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn visit_without_timestamp_is_dated_now() {
        let before = Utc::now();
        let visit: Visit = serde_json::from_value(json!({"notes": "restocked"})).unwrap();
        let after = Utc::now();

        assert!(visit.visited_at >= before && visit.visited_at <= after);
        assert_eq!(visit.notes, "restocked");
    }

    #[test]
    fn visit_keeps_supplied_timestamp() {
        let visit: Visit =
            serde_json::from_value(json!({"visited_at": "2024-03-01T10:00:00Z"})).unwrap();
        assert_eq!(visit.visited_at.to_rfc3339(), "2024-03-01T10:00:00+00:00");
    }

    #[test]
    fn item_amount_multiplies_present_quantity_by_price() {
        let item = VisitItem {
            present_quantity: 5,
            store_quantity: 40,
            price: 10.0,
            ..Default::default()
        };
        assert_eq!(item.amount(), 50.0);
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result: Result<VisitItem, _> =
            serde_json::from_value(json!({"present_quantity": "five"}));
        assert!(result.is_err());
    }
}
