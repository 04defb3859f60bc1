//! Wikipedia summary cache rows.

use caraday_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from `wiki_summary_cache`.
#[derive(Debug, Clone, FromRow)]
pub struct WikiSummaryCacheRow {
    pub id: DbId,
    pub lang: String,
    pub lookup_title: String,
    pub title: String,
    pub extract: String,
    pub url: String,
    pub source: String,
    pub fetched_at: Timestamp,
    pub expires_at: Timestamp,
}

/// DTO for storing a fetched summary.
#[derive(Debug, Clone)]
pub struct UpsertWikiSummary {
    pub lang: String,
    pub lookup_title: String,
    pub title: String,
    pub extract: String,
    pub url: String,
    pub source: String,
    pub fetched_at: Timestamp,
    pub expires_at: Timestamp,
}
