//! Seeds the storefront database with the demo catalog.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use seed_data::config::SeedConfig;
use seed_data::db::Seeder;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run().await {
        tracing::error!("Error seeding database: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing::info!("Seeding database...");

    let config = SeedConfig::from_env();
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    let summary = Seeder::new(pool).run().await?;

    let titles: Vec<&str> = summary.products.iter().map(|p| p.title.as_str()).collect();
    tracing::info!("Products created: {titles:?}");
    tracing::info!("Database seeded successfully");

    Ok(())
}
