//! Database integration for seeding.
//!
//! The [`Seeder`] resolves or creates the demo merchant and categories and
//! inserts the demo products, reporting what it did via [`SeedSummary`].

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder};
