//! Handler for submitting a guess against today's puzzle.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use caraday_core::car::{BodyType, CarModel, FuelType, Transmission, VariantWithModel};
use caraday_core::error::CoreError;
use caraday_core::feedback::{evaluate_model_guess, evaluate_variant_guess};
use caraday_core::label::{model_label, variant_label};
use caraday_core::puzzle::PuzzleTarget;
use caraday_core::types::DbId;
use caraday_db::repositories::DailyPuzzleRepo;
use serde::{Deserialize, Serialize};

use super::{ensure_model, ensure_variant};
use crate::error::AppResult;
use crate::query::ModeParams;
use crate::state::AppState;

/// Request body for `POST /guess`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub puzzle_id: DbId,
    pub guess_id: DbId,
}

/// Guessed model as echoed back to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelGuess {
    pub id: DbId,
    pub label: String,
    pub make: String,
    pub model: String,
    pub generation: Option<String>,
    pub body_type: BodyType,
    pub country_of_origin: String,
    pub production_start_year: i32,
}

impl ModelGuess {
    fn new(id: DbId, label: String, model: CarModel, start_year: i32) -> Self {
        Self {
            id,
            label,
            make: model.make,
            model: model.model,
            generation: model.generation,
            body_type: model.body_type,
            country_of_origin: model.country_of_origin,
            production_start_year: start_year,
        }
    }
}

/// Guessed variant: the model fields plus the variant's own.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantGuess {
    #[serde(flatten)]
    pub model_fields: ModelGuess,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub power_hp: Option<i32>,
    pub engine_type: Option<String>,
    pub displacement_cc: Option<i32>,
    pub max_speed_kmh: Option<i32>,
    pub zero_to_hundred_sec: Option<f64>,
}

impl From<VariantWithModel> for VariantGuess {
    fn from(entity: VariantWithModel) -> Self {
        let label = variant_label(&entity);
        let start_year = entity.effective_start_year();
        let v = entity.variant;
        Self {
            model_fields: ModelGuess::new(v.id, label, entity.model, start_year),
            fuel_type: v.fuel_type,
            transmission: v.transmission,
            power_hp: v.power_hp,
            engine_type: v.engine_type,
            displacement_cc: v.displacement_cc,
            max_speed_kmh: v.max_speed_kmh,
            zero_to_hundred_sec: v.zero_to_hundred_sec,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GuessResponse<F, G> {
    pub feedback: F,
    pub guess: G,
}

/// POST /guess?mode=
///
/// Compare a guess with the target of today's puzzle. A puzzle from another
/// day or another mode is refused with 412 rather than evaluated.
pub async fn submit_guess(
    State(state): State<AppState>,
    Query(params): Query<ModeParams>,
    Json(input): Json<GuessRequest>,
) -> AppResult<impl IntoResponse> {
    let mode = params.mode()?;

    let puzzle = DailyPuzzleRepo::find_by_id(&state.pool, input.puzzle_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "DailyPuzzle",
            id: input.puzzle_id,
        })?;

    if puzzle.mode != mode {
        return Err(CoreError::PreconditionFailed(format!(
            "Puzzle {} is a {} puzzle, not {mode}",
            puzzle.id, puzzle.mode
        ))
        .into());
    }
    let today = state.today_key();
    if puzzle.date != today {
        return Err(CoreError::PreconditionFailed(format!(
            "Puzzle {} is for {}, today is {today}",
            puzzle.id, puzzle.date
        ))
        .into());
    }

    let response = match puzzle.target {
        PuzzleTarget::Model { model_id } => {
            let target = ensure_model(&state.pool, model_id).await?;
            let guess = ensure_model(&state.pool, input.guess_id).await?;
            let feedback = evaluate_model_guess(&target, &guess);

            tracing::info!(
                puzzle_id = puzzle.id,
                guess_id = guess.id,
                solved = feedback.is_solved(),
                "Easy guess evaluated",
            );

            let label = model_label(&guess);
            let start_year = guess.production_start_year;
            Json(GuessResponse {
                feedback,
                guess: ModelGuess::new(guess.id, label, guess, start_year),
            })
            .into_response()
        }
        PuzzleTarget::Variant { variant_id, .. } => {
            let target = ensure_variant(&state.pool, variant_id).await?;
            let guess = ensure_variant(&state.pool, input.guess_id).await?;
            let feedback = evaluate_variant_guess(&target, &guess);

            tracing::info!(
                puzzle_id = puzzle.id,
                guess_id = guess.variant.id,
                solved = feedback.is_solved(),
                "Hard guess evaluated",
            );

            Json(GuessResponse {
                feedback,
                guess: VariantGuess::from(guess),
            })
            .into_response()
        }
    };

    Ok(response)
}
