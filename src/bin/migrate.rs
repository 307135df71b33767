//! SeaORM migration CLI over the crate's revision chain:
//! `cargo run --bin migrate -- up|down|status|fresh|refresh|reset`.
//! Reads `DATABASE_URL` from the environment or `.env`.

use agri_market_api::migrations::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    sea_orm_migration::cli::run_cli(Migrator).await;
}
