//! Search term helpers for the suggestion endpoints.
//!
//! Lives in `core` so the repository layer only has to bind parameters.

use crate::car::{FuelType, Transmission};
use crate::error::CoreError;

/// Maximum number of suggestions returned per query.
pub const SUGGESTION_LIMIT: i64 = 10;

/// A parsed variant search: the raw term plus any keyword interpretations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSearch {
    pub term: String,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    pub number: Option<i32>,
}

/// Trim a search term, rejecting blank input.
pub fn normalize_term(raw: &str) -> Result<String, CoreError> {
    let term = raw.trim();
    if term.is_empty() {
        return Err(CoreError::Validation("Search query must not be empty".into()));
    }
    Ok(term.to_string())
}

/// Escape `%`, `_` and `\` so the term matches literally inside `ILIKE`.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Interpret a term as a fuel keyword (`petrol`, `gasoline`, `diesel`, `ev`, ...).
pub fn parse_fuel_keyword(term: &str) -> Option<FuelType> {
    match term.to_lowercase().as_str() {
        "petrol" | "gasoline" => Some(FuelType::Petrol),
        "diesel" => Some(FuelType::Diesel),
        "electric" | "ev" => Some(FuelType::Electric),
        "hybrid" => Some(FuelType::Hybrid),
        _ => None,
    }
}

/// Interpret a term as a gearbox keyword (`auto`, `automatic`, `manual`, `mt`).
pub fn parse_transmission_keyword(term: &str) -> Option<Transmission> {
    match term.to_lowercase().as_str() {
        "auto" | "automatic" => Some(Transmission::Automatic),
        "manual" | "mt" => Some(Transmission::Manual),
        _ => None,
    }
}

/// Build a [`VariantSearch`] from raw user input.
pub fn parse_variant_search(raw: &str) -> Result<VariantSearch, CoreError> {
    let term = normalize_term(raw)?;
    Ok(VariantSearch {
        fuel_type: parse_fuel_keyword(&term),
        transmission: parse_transmission_keyword(&term),
        number: term.parse::<i32>().ok(),
        term,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn blank_terms_are_rejected() {
        assert_matches!(normalize_term("   "), Err(CoreError::Validation(_)));
        assert_eq!(normalize_term("  golf ").unwrap(), "golf");
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("208"), "%208%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_fuel_keyword("EV"), Some(FuelType::Electric));
        assert_eq!(parse_fuel_keyword("Gasoline"), Some(FuelType::Petrol));
        assert_eq!(parse_transmission_keyword("MT"), Some(Transmission::Manual));
        assert_eq!(parse_transmission_keyword("golf"), None);
    }

    #[test]
    fn numeric_terms_match_power_or_displacement() {
        let search = parse_variant_search(" 110 ").unwrap();
        assert_eq!(search.term, "110");
        assert_eq!(search.number, Some(110));
        assert_eq!(search.fuel_type, None);
    }
}
