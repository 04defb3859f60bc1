//! Wikipedia summary client with a database-backed cache.
//!
//! Each `(language, title)` lookup consults `wiki_summary_cache` first and
//! only then calls the REST `page/summary` endpoint. Fetch failures are
//! logged and treated as a miss so the next candidate is tried.

use std::time::Duration;

use caraday_core::car::CarModel;
use caraday_core::wiki::{lookup_plan, WikiLang, WikiSummary, SUMMARY_SOURCE};
use caraday_db::models::wiki_summary::UpsertWikiSummary;
use caraday_db::repositories::WikiSummaryRepo;
use caraday_db::DbPool;
use chrono::Utc;
use reqwest::header::USER_AGENT;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::config::WikiConfig;

/// Errors from a single summary fetch.
#[derive(Debug, thiserror::Error)]
pub enum WikiClientError {
    /// The configured base did not produce a valid URL.
    #[error("Invalid Wikipedia URL: {0}")]
    Url(String),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Wikipedia returned a non-2xx status other than 404.
    #[error("Wikipedia API error ({status})")]
    ApiError { status: u16 },
}

/// Subset of the REST summary payload we use.
#[derive(Debug, Deserialize)]
struct SummaryPayload {
    title: Option<String>,
    extract: Option<String>,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<PageUrl>,
}

#[derive(Debug, Deserialize)]
struct PageUrl {
    page: Option<String>,
}

/// HTTP client for the Wikipedia REST API.
pub struct WikiClient {
    client: reqwest::Client,
    api_base: String,
    user_agent: String,
    cache_days: i64,
    timeout: Duration,
}

impl WikiClient {
    pub fn new(config: &WikiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.api_base.clone(),
            user_agent: config.user_agent.clone(),
            cache_days: config.cache_days,
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// `{base}/page/summary/{title}` for `lang`, with the title
    /// percent-encoded as a single path segment.
    pub fn summary_url(&self, lang: WikiLang, title: &str) -> Result<Url, WikiClientError> {
        let base = self.api_base.replace("{lang}", lang.as_str());
        let mut url = Url::parse(&base).map_err(|e| WikiClientError::Url(format!("{base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| WikiClientError::Url(base.clone()))?
            .pop_if_empty()
            .extend(["page", "summary", title]);
        Ok(url)
    }

    /// Fetch one summary. `Ok(None)` for a missing page or an empty extract.
    pub async fn fetch_summary(
        &self,
        lang: WikiLang,
        title: &str,
    ) -> Result<Option<WikiSummary>, WikiClientError> {
        let url = self.summary_url(lang, title)?;
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(WikiClientError::ApiError {
                status: status.as_u16(),
            });
        }

        let payload: SummaryPayload = response.json().await?;
        Ok(summary_from_payload(lang, title, payload))
    }

    /// Cached-then-fetched summary for one candidate. Never fails: cache and
    /// network errors are logged and reported as a miss.
    async fn summary_with_cache(
        &self,
        pool: &DbPool,
        lang: WikiLang,
        title: &str,
    ) -> Option<WikiSummary> {
        match WikiSummaryRepo::find_fresh(pool, lang.as_str(), title, Utc::now()).await {
            Ok(Some(row)) => {
                tracing::debug!(lang = %lang, title, "Wikipedia summary cache hit");
                return Some(WikiSummary {
                    used_lang: lang,
                    title: row.title,
                    extract: row.extract,
                    url: row.url,
                });
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, lang = %lang, title, "Wikipedia cache read failed"),
        }

        let summary = match self.fetch_summary(lang, title).await {
            Ok(Some(summary)) => summary,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, lang = %lang, title, "Wikipedia fetch failed");
                return None;
            }
        };

        let now = Utc::now();
        let entry = UpsertWikiSummary {
            lang: lang.as_str().to_string(),
            lookup_title: title.to_string(),
            title: summary.title.clone(),
            extract: summary.extract.clone(),
            url: summary.url.clone(),
            source: SUMMARY_SOURCE.to_string(),
            fetched_at: now,
            expires_at: now + chrono::Duration::days(self.cache_days),
        };
        if let Err(e) = WikiSummaryRepo::upsert(pool, &entry).await {
            tracing::warn!(error = %e, lang = %lang, title, "Wikipedia cache write failed");
        }

        Some(summary)
    }

    /// First summary found along the model's lookup plan.
    pub async fn summary_for_model(
        &self,
        pool: &DbPool,
        model: &CarModel,
        preferred: WikiLang,
    ) -> Option<WikiSummary> {
        for (lang, title) in lookup_plan(model, preferred) {
            if let Some(summary) = self.summary_with_cache(pool, lang, &title).await {
                return Some(summary);
            }
        }
        tracing::info!(model_id = model.id, lang = %preferred, "No Wikipedia summary found");
        None
    }
}

fn summary_from_payload(
    lang: WikiLang,
    requested_title: &str,
    payload: SummaryPayload,
) -> Option<WikiSummary> {
    let extract = payload.extract.filter(|e| !e.trim().is_empty())?;
    let url = payload
        .content_urls
        .and_then(|c| c.desktop)
        .and_then(|d| d.page)
        .unwrap_or_default();
    Some(WikiSummary {
        used_lang: lang,
        title: payload.title.unwrap_or_else(|| requested_title.to_string()),
        extract,
        url,
    })
}
