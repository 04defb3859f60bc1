//! Database row structs and DTOs.
//!
//! Rows keep enum columns as TEXT and convert into the `caraday_core`
//! domain types; a row that does not convert surfaces as
//! [`sqlx::Error::Decode`].

pub mod car;
pub mod daily_puzzle;
pub mod wiki_summary;

/// A stored value that does not map onto a domain type.
#[derive(Debug, thiserror::Error)]
#[error("Invalid {table} row {id}: {reason}")]
pub struct RowConversionError {
    pub table: &'static str,
    pub id: caraday_core::types::DbId,
    pub reason: String,
}

impl From<RowConversionError> for sqlx::Error {
    fn from(err: RowConversionError) -> Self {
        sqlx::Error::Decode(Box::new(err))
    }
}
