//! Repository for the `wiki_summary_cache` table.

use caraday_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::wiki_summary::{UpsertWikiSummary, WikiSummaryCacheRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, lang, lookup_title, title, extract, url, source, fetched_at, expires_at";

/// Provides data access for cached Wikipedia summaries.
pub struct WikiSummaryRepo;

impl WikiSummaryRepo {
    /// A cached summary for `(lang, lookup_title)` that has not expired at `now`.
    pub async fn find_fresh(
        pool: &PgPool,
        lang: &str,
        lookup_title: &str,
        now: Timestamp,
    ) -> Result<Option<WikiSummaryCacheRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wiki_summary_cache \
             WHERE lang = $1 AND lookup_title = $2 AND expires_at > $3"
        );
        sqlx::query_as::<_, WikiSummaryCacheRow>(&query)
            .bind(lang)
            .bind(lookup_title)
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Insert or refresh the cache entry for `(lang, lookup_title)`.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertWikiSummary,
    ) -> Result<WikiSummaryCacheRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO wiki_summary_cache \
                 (lang, lookup_title, title, extract, url, source, fetched_at, expires_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (lang, lookup_title) DO UPDATE SET \
                 title = EXCLUDED.title, \
                 extract = EXCLUDED.extract, \
                 url = EXCLUDED.url, \
                 source = EXCLUDED.source, \
                 fetched_at = EXCLUDED.fetched_at, \
                 expires_at = EXCLUDED.expires_at \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WikiSummaryCacheRow>(&query)
            .bind(&input.lang)
            .bind(&input.lookup_title)
            .bind(&input.title)
            .bind(&input.extract)
            .bind(&input.url)
            .bind(&input.source)
            .bind(input.fetched_at)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }
}
