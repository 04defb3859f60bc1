//! Daily puzzle selection.
//!
//! Each `(date, mode)` pair moves from unassigned to assigned exactly once.
//! The target is picked deterministically from the candidate pool using a
//! stable hash of `"{date}:{MODE}"`, so the pair itself is the seed and the
//! choice is reproducible across restarts and hosts. The first assignment is
//! persisted through a [`PuzzleStore`]; concurrent first requests converge on
//! whichever row the store accepted first.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Difficulty tier: guess the model (easy) or the exact variant (hard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PuzzleMode {
    Easy,
    Hard,
}

impl PuzzleMode {
    /// Database / wire representation (`EASY` / `HARD`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Hard => "HARD",
        }
    }

    /// The other mode for the same date.
    pub fn sibling(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    /// Plural noun for the candidate pool, used in error messages.
    pub fn pool_noun(self) -> &'static str {
        match self {
            Self::Easy => "car models",
            Self::Hard => "car variants",
        }
    }
}

impl fmt::Display for PuzzleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized mode string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown puzzle mode '{0}', expected 'easy' or 'hard'")]
pub struct ParseModeError(pub String);

impl FromStr for PuzzleMode {
    type Err = ParseModeError;

    /// Case-insensitive: accepts `easy`, `EASY`, `hard`, `HARD`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// What a daily puzzle points at. The variant form also carries the owning
/// model so the anti-repeat rule can compare across modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PuzzleTarget {
    #[serde(rename_all = "camelCase")]
    Model { model_id: DbId },
    #[serde(rename_all = "camelCase")]
    Variant { variant_id: DbId, model_id: DbId },
}

impl PuzzleTarget {
    /// The car model this target belongs to.
    pub fn model_id(&self) -> DbId {
        match *self {
            Self::Model { model_id } | Self::Variant { model_id, .. } => model_id,
        }
    }
}

/// A persisted daily puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleRecord {
    pub id: DbId,
    pub date: String,
    pub mode: PuzzleMode,
    pub target: PuzzleTarget,
}

/// A puzzle about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPuzzle {
    pub date: String,
    pub mode: PuzzleMode,
    pub target: PuzzleTarget,
}

/// One entry of the candidate pool. For easy mode `id == model_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub id: DbId,
    pub model_id: DbId,
}

impl Candidate {
    /// Candidate for an easy-mode pool.
    pub fn model(model_id: DbId) -> Self {
        Self {
            id: model_id,
            model_id,
        }
    }

    /// Candidate for a hard-mode pool.
    pub fn variant(variant_id: DbId, model_id: DbId) -> Self {
        Self {
            id: variant_id,
            model_id,
        }
    }

    fn into_target(self, mode: PuzzleMode) -> PuzzleTarget {
        match mode {
            PuzzleMode::Easy => PuzzleTarget::Model {
                model_id: self.model_id,
            },
            PuzzleMode::Hard => PuzzleTarget::Variant {
                variant_id: self.id,
                model_id: self.model_id,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Persistence seam
// ---------------------------------------------------------------------------

/// Persistence operations the selector needs.
#[async_trait]
pub trait PuzzleStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Look up the assigned puzzle for `(date, mode)`.
    async fn find_puzzle(
        &self,
        date: &str,
        mode: PuzzleMode,
    ) -> Result<Option<PuzzleRecord>, Self::Error>;

    /// Every candidate for `mode`, in any order.
    async fn candidate_pool(&self, mode: PuzzleMode) -> Result<Vec<Candidate>, Self::Error>;

    /// Insert unless a row for `(date, mode)` already exists.
    ///
    /// Returns `None` when another writer got there first.
    async fn insert_puzzle(&self, puzzle: &NewPuzzle) -> Result<Option<PuzzleRecord>, Self::Error>;
}

/// Failures of [`resolve_or_create`].
#[derive(Debug, thiserror::Error)]
pub enum SelectorError<E> {
    /// The catalog has no candidates for this mode. Not retryable.
    #[error("No {} available to create today's puzzle.", .mode.pool_noun())]
    EmptyPool { mode: PuzzleMode },

    /// The insert reported a conflict but the winning row could not be read.
    #[error("Puzzle for {date} ({mode}) missing after insert conflict")]
    MissingAfterConflict { date: String, mode: PuzzleMode },

    /// Store failure, propagated unmodified.
    #[error(transparent)]
    Store(E),
}

// ---------------------------------------------------------------------------
// Deterministic selection
// ---------------------------------------------------------------------------

/// Hash seed for a `(date, mode)` pair.
pub fn seed_key(date: &str, mode: PuzzleMode) -> String {
    format!("{date}:{}", mode.as_str())
}

/// 32-bit polynomial rolling hash (`h = h * 31 + byte`, wrapping) over UTF-8 bytes.
pub fn rolling_hash(key: &str) -> u32 {
    key.bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)))
}

/// Stable index into a pool of `len` entries. Returns 0 for an empty pool.
pub fn deterministic_index(key: &str, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    rolling_hash(key) as usize % len
}

/// Pick a candidate for `key`, avoiding `avoid_model_id` when possible.
///
/// The pool is sorted by id first so input order never matters. If the
/// exclusion would empty the pool, the full pool is used instead.
pub fn select_candidate(
    pool: &[Candidate],
    avoid_model_id: Option<DbId>,
    key: &str,
) -> Option<Candidate> {
    let mut sorted = pool.to_vec();
    sorted.sort_by_key(|c| c.id);

    let filtered: Vec<Candidate> = match avoid_model_id {
        Some(model_id) => sorted
            .iter()
            .copied()
            .filter(|c| c.model_id != model_id)
            .collect(),
        None => Vec::new(),
    };

    let effective = if filtered.is_empty() {
        &sorted
    } else {
        &filtered
    };

    effective
        .get(deterministic_index(key, effective.len()))
        .copied()
}

/// Return the puzzle for `(date, mode)`, creating it on first access.
pub async fn resolve_or_create<S>(
    store: &S,
    date: &str,
    mode: PuzzleMode,
) -> Result<PuzzleRecord, SelectorError<S::Error>>
where
    S: PuzzleStore + ?Sized,
{
    if let Some(existing) = store
        .find_puzzle(date, mode)
        .await
        .map_err(SelectorError::Store)?
    {
        return Ok(existing);
    }

    let pool = store
        .candidate_pool(mode)
        .await
        .map_err(SelectorError::Store)?;
    if pool.is_empty() {
        return Err(SelectorError::EmptyPool { mode });
    }

    let avoid_model_id = store
        .find_puzzle(date, mode.sibling())
        .await
        .map_err(SelectorError::Store)?
        .map(|sibling| sibling.target.model_id());

    let key = seed_key(date, mode);
    let chosen = select_candidate(&pool, avoid_model_id, &key)
        .ok_or(SelectorError::EmptyPool { mode })?;

    let new_puzzle = NewPuzzle {
        date: date.to_string(),
        mode,
        target: chosen.into_target(mode),
    };

    match store
        .insert_puzzle(&new_puzzle)
        .await
        .map_err(SelectorError::Store)?
    {
        Some(created) => {
            tracing::info!(
                puzzle_id = created.id,
                date,
                mode = %mode,
                target_id = chosen.id,
                pool_size = pool.len(),
                "Daily puzzle created",
            );
            Ok(created)
        }
        None => {
            tracing::debug!(date, mode = %mode, "Lost daily puzzle creation race, re-fetching");
            store
                .find_puzzle(date, mode)
                .await
                .map_err(SelectorError::Store)?
                .ok_or_else(|| SelectorError::MissingAfterConflict {
                    date: date.to_string(),
                    mode,
                })
        }
    }
}
