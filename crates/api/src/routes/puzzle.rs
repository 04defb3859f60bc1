use axum::routing::get;
use axum::Router;

use crate::handlers::puzzle;
use crate::state::AppState;

/// Daily puzzle routes mounted at `/puzzle`.
///
/// ```text
/// GET /today          -> get_today
/// GET /wiki-summary   -> get_wiki_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/today", get(puzzle::get_today))
        .route("/wiki-summary", get(puzzle::get_wiki_summary))
}
