//! Repository for the `people` table.

use holonet_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::people::{CreatePeople, People};

const COLUMNS: &str = "id, name";

/// Provides list/get/insert operations for people.
pub struct PeopleRepo;

impl PeopleRepo {
    /// List all people in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<People>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people ORDER BY id");
        sqlx::query_as::<_, People>(&query).fetch_all(pool).await
    }

    /// Find a person by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<People>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        sqlx::query_as::<_, People>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a person, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreatePeople) -> Result<People, sqlx::Error> {
        let query = format!("INSERT INTO people (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, People>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Insert every name in a single transaction.
    ///
    /// Either all rows are committed or none are. No duplicate check is
    /// made, so repeating a batch inserts the same names again.
    pub async fn create_many(
        pool: &SqlitePool,
        names: &[String],
    ) -> Result<Vec<People>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("INSERT INTO people (name) VALUES ($1) RETURNING {COLUMNS}");
        let mut created = Vec::with_capacity(names.len());
        for name in names {
            let row = sqlx::query_as::<_, People>(&query)
                .bind(name)
                .fetch_one(&mut *tx)
                .await?;
            created.push(row);
        }

        tx.commit().await?;
        Ok(created)
    }
}
