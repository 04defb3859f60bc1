pub mod guess;
pub mod puzzle;
pub mod search;

use caraday_core::car::{CarModel, VariantWithModel};
use caraday_core::error::CoreError;
use caraday_core::types::DbId;
use caraday_db::repositories::{CarModelRepo, CarVariantRepo};
use caraday_db::DbPool;

use crate::error::AppResult;

/// Load a car model or fail with `NotFound`.
pub(crate) async fn ensure_model(pool: &DbPool, id: DbId) -> AppResult<CarModel> {
    CarModelRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "CarModel",
            id,
        })
        .map_err(Into::into)
}

/// Load a variant with its parent model or fail with `NotFound`.
pub(crate) async fn ensure_variant(pool: &DbPool, id: DbId) -> AppResult<VariantWithModel> {
    CarVariantRepo::find_with_model(pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "CarVariant",
            id,
        })
        .map_err(Into::into)
}
