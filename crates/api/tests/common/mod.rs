#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use caraday_api::config::{ServerConfig, WikiConfig};
use caraday_api::router::build_app_router;
use caraday_api::state::AppState;
use caraday_core::date_key::{date_key, parse_timezone, previous_date_key, DEFAULT_PUZZLE_TIMEZONE};
use caraday_core::puzzle::PuzzleRecord;
use caraday_db::repositories::DailyPuzzleRepo;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Wikipedia calls point at a closed local port so every fetch is a miss.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
        puzzle_timezone: parse_timezone(DEFAULT_PUZZLE_TIMEZONE).unwrap(),
        max_attempts: 10,
        seed_catalog: false,
        wiki: WikiConfig {
            api_base: "http://127.0.0.1:9/{lang}".to_string(),
            user_agent: "caraday-tests".to_string(),
            cache_days: 30,
            request_timeout_secs: 1,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

/// Seed the starter catalog and return the app.
pub async fn seeded_app(pool: &PgPool) -> Router {
    caraday_db::seed_catalog(pool).await.unwrap();
    build_test_app(pool.clone())
}

/// Today's key in the test puzzle zone.
pub fn today() -> String {
    date_key(chrono::Utc::now(), test_config().puzzle_timezone)
}

pub fn yesterday() -> String {
    previous_date_key(&today()).unwrap()
}

/// Read back a puzzle created through the API.
pub async fn puzzle_by_id(pool: &PgPool, id: i64) -> PuzzleRecord {
    DailyPuzzleRepo::find_by_id(pool, id).await.unwrap().unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
