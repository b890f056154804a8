//! Repository for the `favorite` table.
//!
//! Reads resolve the referenced person and planet with explicit LEFT JOINs
//! and return plain [`FavoriteDetail`] records.

use holonet_core::favorite::FavoriteTarget;
use holonet_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::favorite::{Favorite, FavoriteDetail, FavoriteDetailRow};

const COLUMNS: &str = "id, user_id, people_id, planet_id";

/// Join used by every detail query. Callers append `WHERE` / `ORDER BY`.
const DETAIL_SELECT: &str = "SELECT f.id, f.user_id, \
        p.id AS people_id, p.name AS people_name, \
        pl.id AS planet_id, pl.name AS planet_name \
     FROM favorite f \
     LEFT JOIN people p ON p.id = f.people_id \
     LEFT JOIN planet pl ON pl.id = f.planet_id";

/// Provides insert, listing and target-based deletion for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Insert a favorite linking `user_id` to `target`.
    ///
    /// Fails with a foreign-key violation if the user or target is missing.
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        target: FavoriteTarget,
    ) -> Result<Favorite, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorite (user_id, people_id, planet_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(target.people_id())
            .bind(target.planet_id())
            .fetch_one(pool)
            .await
    }

    /// List a single user's favorites with their targets resolved.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: DbId,
    ) -> Result<Vec<FavoriteDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE f.user_id = $1 ORDER BY f.id");
        let rows = sqlx::query_as::<_, FavoriteDetailRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(FavoriteDetail::from).collect())
    }

    /// List every favorite with its target resolved, ordered by user then ID.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<FavoriteDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY f.user_id, f.id");
        let rows = sqlx::query_as::<_, FavoriteDetailRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(FavoriteDetail::from).collect())
    }

    /// Delete one favorite pointing at `target`. Returns `true` if a row was removed.
    ///
    /// The lowest-ID match is removed. With `user_id = None` the match is
    /// taken across all users; with `Some(id)` only that user's rows count.
    pub async fn delete_by_target(
        pool: &SqlitePool,
        target: FavoriteTarget,
        user_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let column = target.kind().column();
        let query = format!(
            "DELETE FROM favorite WHERE id = (
                SELECT id FROM favorite
                WHERE {column} = $1 AND ($2 IS NULL OR user_id = $2)
                ORDER BY id
                LIMIT 1
             )"
        );
        let result = sqlx::query(&query)
            .bind(target.id())
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
