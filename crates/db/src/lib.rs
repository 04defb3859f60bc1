//! PostgreSQL persistence for Caraday.
//!
//! Row models, repositories, embedded migrations, and the
//! [`PgPuzzleStore`](puzzle_store::PgPuzzleStore) used by the daily puzzle
//! selector.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod puzzle_store;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify connectivity.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations embedded from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Load the starter car catalog. Idempotent.
pub async fn seed_catalog(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(include_str!("../seeds/catalog.sql"))
        .execute(pool)
        .await?;
    tracing::info!("Starter catalog seeded");
    Ok(())
}
