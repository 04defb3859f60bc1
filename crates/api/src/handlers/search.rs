//! Handlers for the guess suggestion endpoints.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use caraday_core::label::{model_label, variant_label};
use caraday_core::search::{like_pattern, normalize_term, parse_variant_search, SUGGESTION_LIMIT};
use caraday_core::types::DbId;
use caraday_db::repositories::{CarModelRepo, CarVariantRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::state::AppState;

/// One autocomplete entry.
#[derive(Debug, Serialize)]
pub struct Suggestion {
    pub id: DbId,
    pub label: String,
}

/// GET /search/models?q=
pub async fn search_models(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let term = normalize_term(params.term())?;
    let models = CarModelRepo::search(&state.pool, &like_pattern(&term), SUGGESTION_LIMIT).await?;

    let suggestions: Vec<Suggestion> = models
        .iter()
        .map(|m| Suggestion {
            id: m.id,
            label: model_label(m),
        })
        .collect();

    Ok(Json(suggestions))
}

/// GET /search/variants?q=
pub async fn search_variants(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let search = parse_variant_search(params.term())?;
    let variants = CarVariantRepo::search(
        &state.pool,
        &search,
        &like_pattern(&search.term),
        SUGGESTION_LIMIT,
    )
    .await?;

    let suggestions: Vec<Suggestion> = variants
        .iter()
        .map(|v| Suggestion {
            id: v.variant.id,
            label: variant_label(v),
        })
        .collect();

    Ok(Json(suggestions))
}
