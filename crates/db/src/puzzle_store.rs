//! PostgreSQL implementation of the selector's persistence seam.

use async_trait::async_trait;
use caraday_core::puzzle::{Candidate, NewPuzzle, PuzzleMode, PuzzleRecord, PuzzleStore};
use sqlx::PgPool;

use crate::repositories::{CarModelRepo, CarVariantRepo, DailyPuzzleRepo};

/// [`PuzzleStore`] backed by the `daily_puzzles` and catalog tables.
#[derive(Debug, Clone)]
pub struct PgPuzzleStore {
    pool: PgPool,
}

impl PgPuzzleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PuzzleStore for PgPuzzleStore {
    type Error = sqlx::Error;

    async fn find_puzzle(
        &self,
        date: &str,
        mode: PuzzleMode,
    ) -> Result<Option<PuzzleRecord>, sqlx::Error> {
        DailyPuzzleRepo::find_by_date_mode(&self.pool, date, mode).await
    }

    async fn candidate_pool(&self, mode: PuzzleMode) -> Result<Vec<Candidate>, sqlx::Error> {
        match mode {
            PuzzleMode::Easy => Ok(CarModelRepo::list_ids(&self.pool)
                .await?
                .into_iter()
                .map(Candidate::model)
                .collect()),
            PuzzleMode::Hard => CarVariantRepo::list_candidates(&self.pool).await,
        }
    }

    async fn insert_puzzle(&self, puzzle: &NewPuzzle) -> Result<Option<PuzzleRecord>, sqlx::Error> {
        DailyPuzzleRepo::insert_if_absent(&self.pool, puzzle).await
    }
}
