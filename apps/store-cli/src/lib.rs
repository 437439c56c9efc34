//! # store-cli: Store Manager Console
//!
//! Runs the store use cases against the configured database and prints
//! their outcome on the console.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Load .env (dotenvy)                                                │
//! │  2. Initialize tracing (stderr), so config warnings are visible        │
//! │  3. StoreConfig::load() from the environment                           │
//! │  4. Database::new(config.to_db_config()) ← pool + migrations           │
//! │  5. Store::new(db)                                                     │
//! │  6. run_demo(): seed customers, list, seed products, list              │
//! │  7. store.close()                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `store-simulate` reuses [`render`] and [`seed`] without a database.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod operations;
pub mod render;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ConfigError, StoreConfig};
pub use error::OperationError;
pub use operations::Store;
pub use seed::Seed;

use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,store_cli=info,store_db=info,sqlx=warn";

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries the operation output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=store_db=debug` - Show every repository call
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The fixed demo sequence run by the `store` binary.
///
/// A failing step is reported and the sequence continues.
pub async fn run_demo(store: &Store, seed: &Seed) {
    println!("🏪 STORE MANAGEMENT SYSTEM\n");

    println!("--- Adding Customers ---");
    for customer in &seed.customers {
        store
            .add_customer(&customer.name, &customer.email, &customer.phone)
            .await;
    }

    store.list_customers().await;

    println!("\n--- Adding Products ---");
    for product in &seed.products {
        store
            .add_product(&product.name, product.price, product.stock)
            .await;
    }

    store.list_products().await;

    println!("\n✅ Operations completed!");
}
