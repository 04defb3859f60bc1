//! Daily puzzle rows.

use caraday_core::puzzle::{PuzzleMode, PuzzleRecord, PuzzleTarget};
use caraday_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use super::RowConversionError;

/// A row from `daily_puzzles`, with the target variant's parent model joined
/// in as `variant_model_id`.
#[derive(Debug, Clone, FromRow)]
pub struct DailyPuzzleRow {
    pub id: DbId,
    pub date: String,
    pub mode: String,
    pub target_model_id: Option<DbId>,
    pub target_variant_id: Option<DbId>,
    pub variant_model_id: Option<DbId>,
    pub created_at: Timestamp,
}

impl TryFrom<DailyPuzzleRow> for PuzzleRecord {
    type Error = RowConversionError;

    fn try_from(row: DailyPuzzleRow) -> Result<Self, Self::Error> {
        let invalid = |reason: String| RowConversionError {
            table: "daily_puzzles",
            id: row.id,
            reason,
        };

        let mode: PuzzleMode = row.mode.parse().map_err(|e| invalid(format!("{e}")))?;

        let target = match (mode, row.target_model_id, row.target_variant_id, row.variant_model_id) {
            (PuzzleMode::Easy, Some(model_id), None, _) => PuzzleTarget::Model { model_id },
            (PuzzleMode::Hard, None, Some(variant_id), Some(model_id)) => PuzzleTarget::Variant {
                variant_id,
                model_id,
            },
            _ => return Err(invalid(format!("target columns do not match mode {mode}"))),
        };

        Ok(PuzzleRecord {
            id: row.id,
            date: row.date,
            mode,
            target,
        })
    }
}
