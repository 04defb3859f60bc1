//! Shared query parameter types for API handlers.

use caraday_core::error::CoreError;
use caraday_core::puzzle::PuzzleMode;
use caraday_core::wiki::WikiLang;
use serde::Deserialize;

/// Parse an optional `mode` value, defaulting to easy when absent.
fn parse_mode(raw: Option<&str>) -> Result<PuzzleMode, CoreError> {
    match raw {
        None => Ok(PuzzleMode::Easy),
        Some(value) => value
            .parse()
            .map_err(|e| CoreError::Validation(format!("{e}"))),
    }
}

/// `?mode=easy|hard`, case-insensitive.
#[derive(Debug, Deserialize)]
pub struct ModeParams {
    pub mode: Option<String>,
}

impl ModeParams {
    pub fn mode(&self) -> Result<PuzzleMode, CoreError> {
        parse_mode(self.mode.as_deref())
    }
}

/// `?q=` for the suggestion endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// The raw term; blank handling is left to the search helpers.
    pub fn term(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

/// `?mode=&date=&lang=` for the Wikipedia summary endpoint.
#[derive(Debug, Deserialize)]
pub struct WikiSummaryParams {
    pub mode: Option<String>,
    pub date: Option<String>,
    pub lang: Option<String>,
}

impl WikiSummaryParams {
    pub fn mode(&self) -> Result<PuzzleMode, CoreError> {
        parse_mode(self.mode.as_deref())
    }

    /// Preferred edition, French unless specified.
    pub fn lang(&self) -> Result<WikiLang, CoreError> {
        match self.lang.as_deref() {
            None => Ok(WikiLang::Fr),
            Some(value) => value
                .parse()
                .map_err(|e| CoreError::Validation(format!("{e}"))),
        }
    }
}
