//! Repository for the `daily_puzzles` table.

use caraday_core::puzzle::{NewPuzzle, PuzzleMode, PuzzleRecord, PuzzleTarget};
use caraday_core::types::DbId;
use sqlx::PgPool;

use crate::models::daily_puzzle::DailyPuzzleRow;

/// Puzzle columns plus the hard-mode target's parent model, for `p LEFT JOIN v`.
const COLUMNS: &str = "\
    p.id, p.date, p.mode, p.target_model_id, p.target_variant_id, \
    v.model_id AS variant_model_id, p.created_at";

/// Provides data access for daily puzzles.
pub struct DailyPuzzleRepo;

impl DailyPuzzleRepo {
    /// Find a puzzle by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PuzzleRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} \
             FROM daily_puzzles p \
             LEFT JOIN car_variants v ON v.id = p.target_variant_id \
             WHERE p.id = $1"
        );
        let row = sqlx::query_as::<_, DailyPuzzleRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        row.map(PuzzleRecord::try_from)
            .transpose()
            .map_err(Into::into)
    }

    /// Find the puzzle assigned to `(date, mode)`.
    pub async fn find_by_date_mode(
        pool: &PgPool,
        date: &str,
        mode: PuzzleMode,
    ) -> Result<Option<PuzzleRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} \
             FROM daily_puzzles p \
             LEFT JOIN car_variants v ON v.id = p.target_variant_id \
             WHERE p.date = $1 AND p.mode = $2"
        );
        let row = sqlx::query_as::<_, DailyPuzzleRow>(&query)
            .bind(date)
            .bind(mode.as_str())
            .fetch_optional(pool)
            .await?;
        row.map(PuzzleRecord::try_from)
            .transpose()
            .map_err(Into::into)
    }

    /// Insert a puzzle unless `(date, mode)` is already taken.
    ///
    /// Returns `None` on conflict; the unique constraint decides the winner.
    pub async fn insert_if_absent(
        pool: &PgPool,
        puzzle: &NewPuzzle,
    ) -> Result<Option<PuzzleRecord>, sqlx::Error> {
        let (target_model_id, target_variant_id) = match puzzle.target {
            PuzzleTarget::Model { model_id } => (Some(model_id), None),
            PuzzleTarget::Variant { variant_id, .. } => (None, Some(variant_id)),
        };

        let query = format!(
            "WITH p AS ( \
                 INSERT INTO daily_puzzles (date, mode, target_model_id, target_variant_id) \
                 VALUES ($1, $2, $3, $4) \
                 ON CONFLICT (date, mode) DO NOTHING \
                 RETURNING id, date, mode, target_model_id, target_variant_id, created_at \
             ) \
             SELECT {COLUMNS} \
             FROM p \
             LEFT JOIN car_variants v ON v.id = p.target_variant_id"
        );
        let row = sqlx::query_as::<_, DailyPuzzleRow>(&query)
            .bind(&puzzle.date)
            .bind(puzzle.mode.as_str())
            .bind(target_model_id)
            .bind(target_variant_id)
            .fetch_optional(pool)
            .await?;
        row.map(PuzzleRecord::try_from)
            .transpose()
            .map_err(Into::into)
    }
}
