//! Repository for the `planet` table.

use holonet_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::planet::{CreatePlanet, Planet};

const COLUMNS: &str = "id, name";

/// Provides list/get/insert operations for planets.
pub struct PlanetRepo;

impl PlanetRepo {
    /// List all planets in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planet ORDER BY id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(pool).await
    }

    /// Find a planet by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planet WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a planet, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreatePlanet) -> Result<Planet, sqlx::Error> {
        let query = format!("INSERT INTO planet (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Planet>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }
}
