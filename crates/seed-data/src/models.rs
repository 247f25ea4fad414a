//! Row types for the storefront entities touched by seeding.
//!
//! Identifiers are opaque strings (see [`crate::id`]); relationships between
//! rows are expressed purely through id fields, matching the storefront
//! schema.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle status of a merchant account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MerchantStatus {
    Active,
    Inactive,
}

impl MerchantStatus {
    /// Database string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MerchantStatus::Active => "ACTIVE",
            MerchantStatus::Inactive => "INACTIVE",
        }
    }
}

/// A merchant row. Products reference their owning merchant by id.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Merchant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: String,
}

/// A product category row.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A product row.
///
/// `price` is in the smallest currency unit. `slug` is derived from the title
/// at seed time (see [`crate::slug::slugify`]).
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub price: i64,
    pub description: String,
    pub manufacturer: String,
    pub category_id: String,
    pub in_stock: i32,
    pub main_image: String,
    pub rating: i32,
    pub merchant_id: String,
}
