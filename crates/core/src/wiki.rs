//! Wikipedia summary lookup planning.
//!
//! Builds the ordered list of `(language, title)` candidates tried for a car
//! model: the preferred language first, then the other one. Fetching and
//! caching live in the API and DB crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::car::CarModel;

/// Days a cached summary stays fresh.
pub const DEFAULT_CACHE_DAYS: i64 = 30;

/// Attribution source name stored with cached rows.
pub const SUMMARY_SOURCE: &str = "wikipedia";

/// Supported Wikipedia editions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WikiLang {
    Fr,
    En,
}

impl WikiLang {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// The fallback edition.
    pub fn other(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Fr,
        }
    }
}

impl fmt::Display for WikiLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language '{0}', expected 'fr' or 'en'")]
pub struct ParseLangError(pub String);

impl FromStr for WikiLang {
    type Err = ParseLangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Self::Fr),
            "en" => Ok(Self::En),
            _ => Err(ParseLangError(s.to_string())),
        }
    }
}

/// A resolved article summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WikiSummary {
    pub used_lang: WikiLang,
    pub title: String,
    pub extract: String,
    pub url: String,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Explicit article title for `lang`, else `"{make} {model}"`.
fn base_title(model: &CarModel, lang: WikiLang) -> String {
    let explicit = match lang {
        WikiLang::Fr => model.wiki_title_fr.as_deref(),
        WikiLang::En => model.wiki_title_en.as_deref(),
    };
    match non_blank(explicit) {
        Some(title) => title.to_string(),
        None => format!("{} {}", model.make, model.model).trim().to_string(),
    }
}

fn generation_hint(model: &CarModel, lang: WikiLang) -> Option<&str> {
    let hint = match lang {
        WikiLang::Fr => model.wiki_generation_hint_fr.as_deref(),
        WikiLang::En => model.wiki_generation_hint_en.as_deref(),
    };
    non_blank(hint)
}

/// Titles to try in one language, most specific first.
pub fn title_candidates(model: &CarModel, lang: WikiLang) -> Vec<String> {
    let base = base_title(model, lang);
    match generation_hint(model, lang) {
        Some(hint) => vec![format!("{base} ({hint})"), format!("{base} {hint}"), base],
        None => vec![base],
    }
}

/// Full lookup order: preferred language candidates, then the fallback's.
pub fn lookup_plan(model: &CarModel, preferred: WikiLang) -> Vec<(WikiLang, String)> {
    [preferred, preferred.other()]
        .into_iter()
        .flat_map(|lang| {
            title_candidates(model, lang)
                .into_iter()
                .map(move |title| (lang, title))
        })
        .collect()
}
