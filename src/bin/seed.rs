//! Populate the catalog database with the bundled sample data.
//!
//! Expects a migrated database (`diesel migration run`). Safe to re-run.
//! Products the seed no longer lists are deleted.

use dotenvy::dotenv;

use royal_catalog::config::ServerConfig;
use royal_catalog::db::establish_connection_pool;
use royal_catalog::repository::DieselRepository;
use royal_catalog::services::seed::{SeedData, load_seed_data};

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = ServerConfig::from_env();

    let data = match SeedData::bundled() {
        Ok(data) => data,
        Err(e) => {
            log::error!("Invalid seed data: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    log::info!("Seeding {}", config.database_url);
    match load_seed_data(&repo, &data) {
        Ok(summary) => log::info!(
            "Seeding finished: {} purposes, {} brands, {} categories, {} products, {} removed",
            summary.purposes,
            summary.brands,
            summary.categories,
            summary.products,
            summary.removed
        ),
        Err(e) => {
            log::error!("Seeding failed: {e}");
            std::process::exit(1);
        }
    }
}
