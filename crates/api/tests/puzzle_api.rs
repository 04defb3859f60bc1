//! HTTP-level tests for `GET /puzzle/today`.

mod common;

use axum::http::StatusCode;
use caraday_core::puzzle::{PuzzleMode, PuzzleTarget};
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn today_returns_puzzle_and_yesterday_label(pool: PgPool) {
    let app = common::seeded_app(&pool).await;
    let response = get(app, "/puzzle/today?mode=easy").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["today"]["date"], common::today());
    assert_eq!(json["today"]["mode"], "EASY");
    assert_eq!(json["today"]["maxAttempts"], 10);
    assert!(json["today"]["puzzleId"].is_number());

    assert_eq!(json["yesterday"]["date"], common::yesterday());
    assert_eq!(json["yesterday"]["mode"], "EASY");
    let label = json["yesterday"]["label"].as_str().unwrap();
    // "Make Model (Gen) - Country - Year"
    assert_eq!(label.split(" - ").count(), 3, "unexpected label {label}");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn today_is_stable_across_requests(pool: PgPool) {
    let app = common::seeded_app(&pool).await;
    let first = body_json(get(app.clone(), "/puzzle/today?mode=hard").await).await;
    let second = body_json(get(app, "/puzzle/today?mode=HARD").await).await;

    assert_eq!(first["today"]["puzzleId"], second["today"]["puzzleId"]);
    assert_eq!(first["yesterday"]["label"], second["yesterday"]["label"]);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM daily_puzzles WHERE mode = 'HARD'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 2, "today and yesterday, created once each");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn hard_puzzle_targets_a_variant(pool: PgPool) {
    let app = common::seeded_app(&pool).await;
    let json = body_json(get(app, "/puzzle/today?mode=hard").await).await;

    let id = json["today"]["puzzleId"].as_i64().unwrap();
    let record = common::puzzle_by_id(&pool, id).await;
    assert_eq!(record.mode, PuzzleMode::Hard);
    assert!(matches!(record.target, PuzzleTarget::Variant { .. }));

    let label = json["yesterday"]["label"].as_str().unwrap();
    assert!(
        label.contains("Manual") || label.contains("Auto"),
        "variant label should name the gearbox: {label}"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn easy_and_hard_avoid_the_same_model(pool: PgPool) {
    let app = common::seeded_app(&pool).await;
    let easy = body_json(get(app.clone(), "/puzzle/today?mode=easy").await).await;
    let hard = body_json(get(app, "/puzzle/today?mode=hard").await).await;

    let easy = common::puzzle_by_id(&pool, easy["today"]["puzzleId"].as_i64().unwrap()).await;
    let hard = common::puzzle_by_id(&pool, hard["today"]["puzzleId"].as_i64().unwrap()).await;
    assert_ne!(easy.target.model_id(), hard.target.model_id());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_mode_defaults_to_easy(pool: PgPool) {
    let app = common::seeded_app(&pool).await;
    let json = body_json(get(app, "/puzzle/today").await).await;
    assert_eq!(json["today"]["mode"], "EASY");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_mode_returns_400(pool: PgPool) {
    let app = common::seeded_app(&pool).await;
    let response = get(app, "/puzzle/today?mode=expert").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_catalog_is_a_configuration_error(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/puzzle/today?mode=easy").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFIGURATION_ERROR");
    assert_eq!(json["error"], "No car models available to create today's puzzle.");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM daily_puzzles")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}
