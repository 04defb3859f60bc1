use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Suggestion routes mounted at `/search`.
///
/// ```text
/// GET /models     -> search_models
/// GET /variants   -> search_variants
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/models", get(search::search_models))
        .route("/variants", get(search::search_variants))
}
