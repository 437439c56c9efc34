//! Schema migrations for `clientes`, `produtos` and `pedidos`.
//!
//! Files live in the workspace `migrations/sqlite/` directory and are named
//! `NNN_description.sql`. Applied files are checksummed, so schema changes go
//! in a new file (say `002_order_items.sql`) rather than an edit.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;

// Embedded at compile time; the binaries never read the directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies every migration not yet recorded in `_sqlx_migrations`, in
/// filename order.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    debug!("Applying pending store migrations");

    MIGRATOR.run(pool).await?;

    info!(count = MIGRATOR.migrations.len(), "Store schema up to date");
    Ok(())
}

/// `(known, applied)` migration counts.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await?;

    Ok((total, applied as usize))
}
