pub mod health;
pub mod puzzle;
pub mod search;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the game route tree. Mounted at the root to match the web client.
///
/// Route hierarchy:
///
/// ```text
/// /puzzle/today                 today's puzzle + yesterday's answer (GET)
/// /puzzle/wiki-summary          summary of a past target (GET)
///
/// /guess                        evaluate a guess (POST)
///
/// /search/models                easy-mode suggestions (GET)
/// /search/variants              hard-mode suggestions (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/puzzle", puzzle::router())
        .route("/guess", post(handlers::guess::submit_guess))
        .nest("/search", search::router())
}
