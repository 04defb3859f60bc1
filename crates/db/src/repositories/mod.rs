//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod car_model_repo;
pub mod car_variant_repo;
pub mod daily_puzzle_repo;
pub mod wiki_summary_repo;

pub use car_model_repo::CarModelRepo;
pub use car_variant_repo::CarVariantRepo;
pub use daily_puzzle_repo::DailyPuzzleRepo;
pub use wiki_summary_repo::WikiSummaryRepo;
