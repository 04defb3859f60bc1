use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, seed, verify the catalog.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    caraday_db::health_check(&pool).await.unwrap();
    caraday_db::seed_catalog(&pool).await.unwrap();

    for table in ["car_models", "car_variants"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count.0 > 0, "{table} should have seed data, got 0 rows");
    }
}

/// Seeding twice must not duplicate rows, including models without a generation.
#[sqlx::test(migrations = "./migrations")]
async fn test_seed_is_idempotent(pool: PgPool) {
    caraday_db::seed_catalog(&pool).await.unwrap();
    let (models, variants): (i64, i64) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM car_models), (SELECT COUNT(*) FROM car_variants)",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    caraday_db::seed_catalog(&pool).await.unwrap();
    let again: (i64, i64) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM car_models), (SELECT COUNT(*) FROM car_variants)",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(again, (models, variants));
}

/// The (date, mode) uniqueness backs the selector's race handling.
#[sqlx::test(migrations = "./migrations")]
async fn test_daily_puzzle_unique_constraint_exists(pool: PgPool) {
    let row: Option<(String,)> = sqlx::query_as(
        "SELECT constraint_type FROM information_schema.table_constraints
         WHERE table_name = 'daily_puzzles' AND constraint_name = 'uq_daily_puzzles_date_mode'",
    )
    .fetch_optional(&pool)
    .await
    .unwrap();
    assert_eq!(row.map(|r| r.0).as_deref(), Some("UNIQUE"));
}
