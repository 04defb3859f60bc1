//! Caraday domain core.
//!
//! Pure game logic with no database or HTTP dependencies: car entities,
//! the guess comparator, the daily puzzle selector, date keys, display
//! labels, and Wikipedia title candidates.

pub mod car;
pub mod date_key;
pub mod error;
pub mod feedback;
pub mod label;
pub mod puzzle;
pub mod search;
pub mod types;
pub mod wiki;

#[cfg(test)]
pub(crate) mod testing;
