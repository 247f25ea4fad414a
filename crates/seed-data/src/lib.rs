//! Demo data seeding for the storefront.
//!
//! This crate populates the storefront database with a fixed baseline dataset
//! so a freshly provisioned environment is immediately usable: one merchant,
//! three categories, and four products referencing them.
//!
//! Merchant and category creation is idempotent (find-before-create); product
//! creation always inserts, so re-running the seeder duplicates products.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env();
//! let pool = PgPoolOptions::new()
//!     .max_connections(config.max_connections)
//!     .connect(&config.database_url)
//!     .await?;
//!
//! let summary = Seeder::new(pool).run().await?;
//! println!("created {} products", summary.products.len());
//! ```

pub mod catalog;
pub mod config;
pub mod db;
pub mod id;
pub mod models;
pub mod slug;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::catalog::{self, MerchantSeed, ProductSeed};
    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, SeedSummary, Seeder};
    pub use crate::models::{Category, Merchant, MerchantStatus, Product};
    pub use crate::slug::slugify;
}
