//! # Store Manager Entry Point
//!
//! Runs the demo sequence against the configured SQLite database.
//!
//! Startup failures (bad configuration, unreachable database, corrupt
//! seed) are returned from `main`; failures inside the sequence are
//! reported and do not stop it.

use store_cli::{init_tracing, run_demo, Seed, Store, StoreConfig};
use store_db::Database;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    init_tracing();

    let config = StoreConfig::load()?;
    info!(path = %config.database_path().display(), "Starting store manager");

    let db = Database::new(config.to_db_config()).await?;
    let store = Store::new(db);
    let seed = Seed::demo()?;

    run_demo(&store, &seed).await;

    store.close().await;
    Ok(())
}
