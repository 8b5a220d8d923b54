//! Table mappings for every record shape.
//!
//! Each shape names its table and non-id columns, binds its fields in
//! column order, and decodes itself from a row. The generic store builds
//! its SQL from these.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, Postgres, Row};

use crate::domain::foundation::Record;
use crate::domain::records::{
    Brand, Category, Company, Product, RetailPoint, User, UserToken, Visit, VisitItem,
};

pub(crate) type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// A record shape persisted in its own PostgreSQL table keyed by `id`.
pub trait PgRecord: Record + for<'r> FromRow<'r, PgRow> {
    const TABLE: &'static str;

    /// Columns besides `id`, in bind order.
    const COLUMNS: &'static [&'static str];

    /// Binds the values for [`PgRecord::COLUMNS`], in order.
    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;
}

pub(crate) fn select_sql<T: PgRecord>(filter: &str) -> String {
    format!(
        "SELECT id, {} FROM {} {}",
        T::COLUMNS.join(", "),
        T::TABLE,
        filter
    )
}

pub(crate) fn insert_sql<T: PgRecord>() -> String {
    let placeholders: Vec<String> = (1..=T::COLUMNS.len() + 1).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} (id, {}) VALUES ({})",
        T::TABLE,
        T::COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

pub(crate) fn update_sql<T: PgRecord>() -> String {
    let assignments: Vec<String> = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 2))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE id = $1",
        T::TABLE,
        assignments.join(", ")
    )
}

// ════════════════════════════════════════════════════════════════════════════
// Users and tokens
// ════════════════════════════════════════════════════════════════════════════

impl PgRecord for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["name", "email", "password"];

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.email.as_str())
            .bind(self.password_hash.as_str())
    }
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            password: String::new(),
            password_hash: row.try_get("password")?,
        })
    }
}

impl PgRecord for UserToken {
    const TABLE: &'static str = "user_tokens";
    const COLUMNS: &'static [&'static str] = &["user_id", "token", "created_at", "expires_at"];

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.user_id.as_str())
            .bind(self.token.as_str())
            .bind(self.created_at)
            .bind(self.expires_at)
    }
}

impl<'r> FromRow<'r, PgRow> for UserToken {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            token: row.try_get("token")?,
            created_at: row.try_get("created_at")?,
            expires_at: row.try_get("expires_at")?,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Companies and retail points
// ════════════════════════════════════════════════════════════════════════════

impl PgRecord for Company {
    const TABLE: &'static str = "companies";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(self.name.as_str())
    }
}

impl<'r> FromRow<'r, PgRow> for Company {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        })
    }
}

impl PgRecord for RetailPoint {
    const TABLE: &'static str = "retail_points";
    const COLUMNS: &'static [&'static str] = &["company_id", "name", "address"];

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.company_id.as_str())
            .bind(self.name.as_str())
            .bind(self.address.as_str())
    }
}

impl<'r> FromRow<'r, PgRow> for RetailPoint {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            company_id: row.try_get("company_id")?,
            name: row.try_get("name")?,
            address: row.try_get("address")?,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Catalog
// ════════════════════════════════════════════════════════════════════════════

impl PgRecord for Brand {
    const TABLE: &'static str = "brands";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query.bind(self.name.as_str())
    }
}

impl<'r> FromRow<'r, PgRow> for Brand {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        })
    }
}

impl PgRecord for Category {
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static [&'static str] = &["name", "parent_id"];

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.parent_id.as_deref())
    }
}

impl<'r> FromRow<'r, PgRow> for Category {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            parent_id: row.try_get("parent_id")?,
        })
    }
}

impl PgRecord for Product {
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &["name", "sku", "brand_id", "category_id"];

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.sku.as_str())
            .bind(self.brand_id.as_str())
            .bind(self.category_id.as_str())
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            sku: row.try_get("sku")?,
            brand_id: row.try_get("brand_id")?,
            category_id: row.try_get("category_id")?,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Visits
// ════════════════════════════════════════════════════════════════════════════

impl PgRecord for Visit {
    const TABLE: &'static str = "visits";
    const COLUMNS: &'static [&'static str] = &["user_id", "retail_point_id", "visited_at", "notes"];

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.user_id.as_str())
            .bind(self.retail_point_id.as_str())
            .bind(self.visited_at)
            .bind(self.notes.as_str())
    }
}

impl<'r> FromRow<'r, PgRow> for Visit {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            retail_point_id: row.try_get("retail_point_id")?,
            visited_at: row.try_get("visited_at")?,
            notes: row.try_get("notes")?,
        })
    }
}

impl PgRecord for VisitItem {
    const TABLE: &'static str = "visit_items";
    const COLUMNS: &'static [&'static str] = &[
        "visit_id",
        "product_id",
        "present_quantity",
        "store_quantity",
        "price",
    ];

    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.visit_id.as_str())
            .bind(self.product_id.as_str())
            .bind(self.present_quantity)
            .bind(self.store_quantity)
            .bind(self.price)
    }
}

impl<'r> FromRow<'r, PgRow> for VisitItem {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            visit_id: row.try_get("visit_id")?,
            product_id: row.try_get("product_id")?,
            present_quantity: row.try_get("present_quantity")?,
            store_quantity: row.try_get("store_quantity")?,
            price: row.try_get("price")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_sql_numbers_id_first() {
        assert_eq!(
            insert_sql::<RetailPoint>(),
            "INSERT INTO retail_points (id, company_id, name, address) VALUES ($1, $2, $3, $4)"
        );
    }

    #[test]
    fn update_sql_keeps_id_as_first_parameter() {
        assert_eq!(
            update_sql::<Product>(),
            "UPDATE products SET name = $2, sku = $3, brand_id = $4, category_id = $5 WHERE id = $1"
        );
    }

    #[test]
    fn select_sql_reads_hash_from_password_column() {
        assert_eq!(
            select_sql::<User>("WHERE email = $1"),
            "SELECT id, name, email, password FROM users WHERE email = $1"
        );
    }

    #[test]
    fn select_sql_without_filter() {
        assert_eq!(select_sql::<Brand>("").trim_end(), "SELECT id, name FROM brands");
    }
}
