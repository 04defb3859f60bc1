//! Handlers for the daily puzzle endpoints.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use caraday_core::date_key::{parse_date_key, previous_date_key};
use caraday_core::error::CoreError;
use caraday_core::label::{model_label, variant_label};
use caraday_core::puzzle::{resolve_or_create, PuzzleMode, PuzzleRecord, PuzzleTarget};
use caraday_core::types::DbId;
use caraday_db::puzzle_store::PgPuzzleStore;
use caraday_db::repositories::DailyPuzzleRepo;
use caraday_db::DbPool;
use serde::Serialize;

use super::{ensure_model, ensure_variant};
use crate::error::{AppError, AppResult};
use crate::query::{ModeParams, WikiSummaryParams};
use crate::state::AppState;

/// Attribution name shown next to a summary.
const ATTRIBUTION_SOURCE: &str = "Wikipedia";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayPuzzle {
    pub date: String,
    pub mode: PuzzleMode,
    pub puzzle_id: DbId,
    pub max_attempts: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YesterdayPuzzle {
    pub date: String,
    pub mode: PuzzleMode,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct PuzzleResponse {
    pub today: TodayPuzzle,
    pub yesterday: YesterdayPuzzle,
}

#[derive(Debug, Serialize)]
pub struct Attribution {
    pub source: &'static str,
    pub url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiSummaryResponse {
    pub date: String,
    pub mode: PuzzleMode,
    #[serde(flatten)]
    pub summary: caraday_core::wiki::WikiSummary,
    pub attribution: Attribution,
}

/// Display label of a puzzle's target.
async fn target_label(pool: &DbPool, puzzle: &PuzzleRecord) -> AppResult<String> {
    match puzzle.target {
        PuzzleTarget::Model { model_id } => Ok(model_label(&ensure_model(pool, model_id).await?)),
        PuzzleTarget::Variant { variant_id, .. } => {
            Ok(variant_label(&ensure_variant(pool, variant_id).await?))
        }
    }
}

/// GET /puzzle/today?mode=
///
/// Today's puzzle id plus yesterday's answer label. Both days are created
/// on first access.
pub async fn get_today(
    State(state): State<AppState>,
    Query(params): Query<ModeParams>,
) -> AppResult<impl IntoResponse> {
    let mode = params.mode()?;
    let today_key = state.today_key();
    let yesterday_key = previous_date_key(&today_key)?;

    let store = PgPuzzleStore::new(state.pool.clone());
    let today = resolve_or_create(&store, &today_key, mode).await?;
    let yesterday = resolve_or_create(&store, &yesterday_key, mode).await?;
    let label = target_label(&state.pool, &yesterday).await?;

    tracing::debug!(date = %today.date, mode = %mode, puzzle_id = today.id, "Served daily puzzle");

    Ok(Json(PuzzleResponse {
        today: TodayPuzzle {
            date: today.date,
            mode,
            puzzle_id: today.id,
            max_attempts: state.config.max_attempts,
        },
        yesterday: YesterdayPuzzle {
            date: yesterday.date,
            mode,
            label,
        },
    }))
}

/// GET /puzzle/wiki-summary?mode=&date=&lang=
///
/// Wikipedia summary of a past puzzle's target model. Today and future
/// dates are refused so the answer cannot leak.
pub async fn get_wiki_summary(
    State(state): State<AppState>,
    Query(params): Query<WikiSummaryParams>,
) -> AppResult<impl IntoResponse> {
    let mode = params.mode()?;
    let lang = params.lang()?;
    let date = params
        .date
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Missing 'date' query parameter".into()))?;
    parse_date_key(date)?;

    let today_key = state.today_key();
    if date >= today_key.as_str() {
        return Err(CoreError::PreconditionFailed(
            "Summaries are only available for past puzzles".into(),
        )
        .into());
    }

    let puzzle = DailyPuzzleRepo::find_by_date_mode(&state.pool, date, mode)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No {mode} puzzle exists for {date}")))?;

    let model = ensure_model(&state.pool, puzzle.target.model_id()).await?;
    let summary = state
        .wiki
        .summary_for_model(&state.pool, &model, lang)
        .await
        .ok_or_else(|| AppError::NotFound("No Wikipedia summary found".into()))?;

    Ok(Json(WikiSummaryResponse {
        date: puzzle.date,
        mode,
        attribution: Attribution {
            source: ATTRIBUTION_SOURCE,
            url: summary.url.clone(),
        },
        summary,
    }))
}
