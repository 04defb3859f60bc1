//! Car catalog rows and DTOs.

use caraday_core::car::{CarModel, CarVariant, VariantWithModel};
use caraday_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

use super::RowConversionError;

// ---------------------------------------------------------------------------
// Entity rows
// ---------------------------------------------------------------------------

/// A row from the `car_models` table.
#[derive(Debug, Clone, FromRow)]
pub struct CarModelRow {
    pub id: DbId,
    pub make: String,
    pub model: String,
    pub generation: Option<String>,
    pub body_type: String,
    pub country_of_origin: String,
    pub production_start_year: i32,
    pub production_end_year: Option<i32>,
    pub wiki_title_fr: Option<String>,
    pub wiki_title_en: Option<String>,
    pub wiki_generation_hint_fr: Option<String>,
    pub wiki_generation_hint_en: Option<String>,
    pub created_at: Timestamp,
}

/// A row from the `car_variants` table.
#[derive(Debug, Clone, FromRow)]
pub struct CarVariantRow {
    pub id: DbId,
    pub model_id: DbId,
    pub fuel_type: String,
    pub transmission: String,
    pub power_hp: Option<i32>,
    pub engine_type: Option<String>,
    pub displacement_cc: Option<i32>,
    pub max_speed_kmh: Option<i32>,
    pub zero_to_hundred_sec: Option<f64>,
    pub production_start_year: Option<i32>,
    pub production_end_year: Option<i32>,
    pub created_at: Timestamp,
}

/// A `car_variants` row joined with its parent `car_models` row.
#[derive(Debug, Clone, FromRow)]
pub struct VariantWithModelRow {
    #[sqlx(flatten)]
    pub variant: CarVariantRow,
    #[sqlx(flatten)]
    pub model: JoinedModelColumns,
}

/// Parent model columns, aliased with an `m_` prefix in joined queries.
#[derive(Debug, Clone, FromRow)]
pub struct JoinedModelColumns {
    pub m_id: DbId,
    pub m_make: String,
    pub m_model: String,
    pub m_generation: Option<String>,
    pub m_body_type: String,
    pub m_country_of_origin: String,
    pub m_production_start_year: i32,
    pub m_production_end_year: Option<i32>,
    pub m_wiki_title_fr: Option<String>,
    pub m_wiki_title_en: Option<String>,
    pub m_wiki_generation_hint_fr: Option<String>,
    pub m_wiki_generation_hint_en: Option<String>,
    pub m_created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Conversions into domain types
// ---------------------------------------------------------------------------

impl TryFrom<CarModelRow> for CarModel {
    type Error = RowConversionError;

    fn try_from(row: CarModelRow) -> Result<Self, Self::Error> {
        let body_type = row.body_type.parse().map_err(|e| RowConversionError {
            table: "car_models",
            id: row.id,
            reason: format!("{e}"),
        })?;

        Ok(CarModel {
            id: row.id,
            make: row.make,
            model: row.model,
            generation: row.generation,
            body_type,
            country_of_origin: row.country_of_origin,
            production_start_year: row.production_start_year,
            production_end_year: row.production_end_year,
            wiki_title_fr: row.wiki_title_fr,
            wiki_title_en: row.wiki_title_en,
            wiki_generation_hint_fr: row.wiki_generation_hint_fr,
            wiki_generation_hint_en: row.wiki_generation_hint_en,
        })
    }
}

impl TryFrom<CarVariantRow> for CarVariant {
    type Error = RowConversionError;

    fn try_from(row: CarVariantRow) -> Result<Self, Self::Error> {
        let invalid = |e: caraday_core::car::ParseEnumError| RowConversionError {
            table: "car_variants",
            id: row.id,
            reason: format!("{e}"),
        };
        let fuel_type = row.fuel_type.parse().map_err(invalid)?;
        let transmission = row.transmission.parse().map_err(invalid)?;

        Ok(CarVariant {
            id: row.id,
            model_id: row.model_id,
            fuel_type,
            transmission,
            power_hp: row.power_hp,
            engine_type: row.engine_type,
            displacement_cc: row.displacement_cc,
            max_speed_kmh: row.max_speed_kmh,
            zero_to_hundred_sec: row.zero_to_hundred_sec,
            production_start_year: row.production_start_year,
            production_end_year: row.production_end_year,
        })
    }
}

impl From<JoinedModelColumns> for CarModelRow {
    fn from(m: JoinedModelColumns) -> Self {
        CarModelRow {
            id: m.m_id,
            make: m.m_make,
            model: m.m_model,
            generation: m.m_generation,
            body_type: m.m_body_type,
            country_of_origin: m.m_country_of_origin,
            production_start_year: m.m_production_start_year,
            production_end_year: m.m_production_end_year,
            wiki_title_fr: m.m_wiki_title_fr,
            wiki_title_en: m.m_wiki_title_en,
            wiki_generation_hint_fr: m.m_wiki_generation_hint_fr,
            wiki_generation_hint_en: m.m_wiki_generation_hint_en,
            created_at: m.m_created_at,
        }
    }
}

impl TryFrom<VariantWithModelRow> for VariantWithModel {
    type Error = RowConversionError;

    fn try_from(row: VariantWithModelRow) -> Result<Self, Self::Error> {
        Ok(VariantWithModel {
            variant: CarVariant::try_from(row.variant)?,
            model: CarModel::try_from(CarModelRow::from(row.model))?,
        })
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for inserting a car model.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCarModel {
    pub make: String,
    pub model: String,
    pub generation: Option<String>,
    pub body_type: caraday_core::car::BodyType,
    pub country_of_origin: String,
    pub production_start_year: i32,
    pub production_end_year: Option<i32>,
    pub wiki_title_fr: Option<String>,
    pub wiki_title_en: Option<String>,
    pub wiki_generation_hint_fr: Option<String>,
    pub wiki_generation_hint_en: Option<String>,
}

/// DTO for inserting a car variant.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCarVariant {
    pub model_id: DbId,
    pub fuel_type: caraday_core::car::FuelType,
    pub transmission: caraday_core::car::Transmission,
    pub power_hp: Option<i32>,
    pub engine_type: Option<String>,
    pub displacement_cc: Option<i32>,
    pub max_speed_kmh: Option<i32>,
    pub zero_to_hundred_sec: Option<f64>,
    pub production_start_year: Option<i32>,
    pub production_end_year: Option<i32>,
}
