//! Repository for the `car_models` table.

use caraday_core::car::CarModel;
use caraday_core::types::DbId;
use sqlx::PgPool;

use crate::models::car::{CarModelRow, CreateCarModel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, make, model, generation, body_type, country_of_origin, \
    production_start_year, production_end_year, \
    wiki_title_fr, wiki_title_en, wiki_generation_hint_fr, wiki_generation_hint_en, \
    created_at";

fn into_models(rows: Vec<CarModelRow>) -> Result<Vec<CarModel>, sqlx::Error> {
    rows.into_iter()
        .map(|row| CarModel::try_from(row).map_err(sqlx::Error::from))
        .collect()
}

/// Provides data access for car models.
pub struct CarModelRepo;

impl CarModelRepo {
    /// Insert a new model, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCarModel) -> Result<CarModel, sqlx::Error> {
        let query = format!(
            "INSERT INTO car_models \
                 (make, model, generation, body_type, country_of_origin, \
                  production_start_year, production_end_year, \
                  wiki_title_fr, wiki_title_en, wiki_generation_hint_fr, wiki_generation_hint_en) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, CarModelRow>(&query)
            .bind(&input.make)
            .bind(&input.model)
            .bind(&input.generation)
            .bind(input.body_type.as_str())
            .bind(&input.country_of_origin)
            .bind(input.production_start_year)
            .bind(input.production_end_year)
            .bind(&input.wiki_title_fr)
            .bind(&input.wiki_title_en)
            .bind(&input.wiki_generation_hint_fr)
            .bind(&input.wiki_generation_hint_en)
            .fetch_one(pool)
            .await?;
        Ok(CarModel::try_from(row)?)
    }

    /// Find a model by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CarModel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_models WHERE id = $1");
        let row = sqlx::query_as::<_, CarModelRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        row.map(CarModel::try_from).transpose().map_err(Into::into)
    }

    /// All model IDs, ascending.
    pub async fn list_ids(pool: &PgPool) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM car_models ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over make, model, generation and
    /// country, ordered by make, model, start year.
    ///
    /// `pattern` must already be an escaped `ILIKE` pattern.
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        limit: i64,
    ) -> Result<Vec<CarModel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM car_models \
             WHERE make ILIKE $1 \
                OR model ILIKE $1 \
                OR generation ILIKE $1 \
                OR country_of_origin ILIKE $1 \
             ORDER BY make, model, production_start_year, id \
             LIMIT $2"
        );
        let rows = sqlx::query_as::<_, CarModelRow>(&query)
            .bind(pattern)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        into_models(rows)
    }
}
