//! Repository for the `car_variants` table.

use caraday_core::car::{CarVariant, VariantWithModel};
use caraday_core::puzzle::Candidate;
use caraday_core::search::VariantSearch;
use caraday_core::types::DbId;
use sqlx::PgPool;

use crate::models::car::{CarVariantRow, CreateCarVariant, VariantWithModelRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, model_id, fuel_type, transmission, power_hp, engine_type, \
    displacement_cc, max_speed_kmh, zero_to_hundred_sec, \
    production_start_year, production_end_year, created_at";

/// Variant columns plus the parent model aliased with `m_`, for `v JOIN m`.
const JOINED_COLUMNS: &str = "\
    v.id, v.model_id, v.fuel_type, v.transmission, v.power_hp, v.engine_type, \
    v.displacement_cc, v.max_speed_kmh, v.zero_to_hundred_sec, \
    v.production_start_year, v.production_end_year, v.created_at, \
    m.id AS m_id, m.make AS m_make, m.model AS m_model, \
    m.generation AS m_generation, m.body_type AS m_body_type, \
    m.country_of_origin AS m_country_of_origin, \
    m.production_start_year AS m_production_start_year, \
    m.production_end_year AS m_production_end_year, \
    m.wiki_title_fr AS m_wiki_title_fr, m.wiki_title_en AS m_wiki_title_en, \
    m.wiki_generation_hint_fr AS m_wiki_generation_hint_fr, \
    m.wiki_generation_hint_en AS m_wiki_generation_hint_en, \
    m.created_at AS m_created_at";

/// Provides data access for car variants.
pub struct CarVariantRepo;

impl CarVariantRepo {
    /// Insert a new variant, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCarVariant,
    ) -> Result<CarVariant, sqlx::Error> {
        let query = format!(
            "INSERT INTO car_variants \
                 (model_id, fuel_type, transmission, power_hp, engine_type, \
                  displacement_cc, max_speed_kmh, zero_to_hundred_sec, \
                  production_start_year, production_end_year) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CarVariantRow>(&query)
            .bind(input.model_id)
            .bind(input.fuel_type.as_str())
            .bind(input.transmission.as_str())
            .bind(input.power_hp)
            .bind(&input.engine_type)
            .bind(input.displacement_cc)
            .bind(input.max_speed_kmh)
            .bind(input.zero_to_hundred_sec)
            .bind(input.production_start_year)
            .bind(input.production_end_year)
            .fetch_one(pool)
            .await?;
        Ok(CarVariant::try_from(row)?)
    }

    /// Find a variant by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CarVariant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_variants WHERE id = $1");
        let row = sqlx::query_as::<_, CarVariantRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        row.map(CarVariant::try_from).transpose().map_err(Into::into)
    }

    /// Find a variant together with its parent model.
    pub async fn find_with_model(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<VariantWithModel>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM car_variants v \
             JOIN car_models m ON m.id = v.model_id \
             WHERE v.id = $1"
        );
        let row = sqlx::query_as::<_, VariantWithModelRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        row.map(VariantWithModel::try_from)
            .transpose()
            .map_err(Into::into)
    }

    /// Every variant as a hard-mode selection candidate.
    pub async fn list_candidates(pool: &PgPool) -> Result<Vec<Candidate>, sqlx::Error> {
        let rows = sqlx::query_as::<_, (DbId, DbId)>(
            "SELECT id, model_id FROM car_variants ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, model_id)| Candidate::variant(id, model_id))
            .collect())
    }

    /// Variant suggestions: substring match on the parent model's names or
    /// the engine code, plus exact matches on any keyword the term parses as.
    pub async fn search(
        pool: &PgPool,
        search: &VariantSearch,
        pattern: &str,
        limit: i64,
    ) -> Result<Vec<VariantWithModel>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM car_variants v \
             JOIN car_models m ON m.id = v.model_id \
             WHERE m.make ILIKE $1 \
                OR m.model ILIKE $1 \
                OR m.generation ILIKE $1 \
                OR v.engine_type ILIKE $1 \
                OR v.fuel_type = $2 \
                OR v.transmission = $3 \
                OR v.power_hp = $4 \
                OR v.displacement_cc = $4 \
             ORDER BY v.id \
             LIMIT $5"
        );
        let rows = sqlx::query_as::<_, VariantWithModelRow>(&query)
            .bind(pattern)
            .bind(search.fuel_type.map(|f| f.as_str()))
            .bind(search.transmission.map(|t| t.as_str()))
            .bind(search.number)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        rows.into_iter()
            .map(|row| VariantWithModel::try_from(row).map_err(sqlx::Error::from))
            .collect()
    }
}
