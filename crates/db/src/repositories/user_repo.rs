//! Repository for the `users` table.

use std::collections::HashMap;

use holonet_core::types::DbId;
use sqlx::SqlitePool;

use super::FavoriteRepo;
use crate::models::favorite::FavoriteDetail;
use crate::models::user::{CreateUser, User, UserWithFavorites};

const COLUMNS: &str = "id, name, email";

/// Provides list/get/insert operations for users.
pub struct UserRepo;

impl UserRepo {
    /// List all users in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a user, returning the created row.
    ///
    /// A duplicate email fails with a unique violation on `uq_users_email`.
    pub async fn create(pool: &SqlitePool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a user by ID together with their favorites.
    pub async fn find_with_favorites(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<UserWithFavorites>, sqlx::Error> {
        let Some(user) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let favorites = FavoriteRepo::list_for_user(pool, user.id).await?;
        Ok(Some(UserWithFavorites { user, favorites }))
    }

    /// List every user with their favorites.
    ///
    /// Issues two queries (users, joined favorites) and groups in memory.
    pub async fn list_with_favorites(
        pool: &SqlitePool,
    ) -> Result<Vec<UserWithFavorites>, sqlx::Error> {
        let users = Self::list(pool).await?;
        let mut by_user: HashMap<DbId, Vec<FavoriteDetail>> = HashMap::new();
        for favorite in FavoriteRepo::list_all(pool).await? {
            by_user.entry(favorite.user_id).or_default().push(favorite);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let favorites = by_user.remove(&user.id).unwrap_or_default();
                UserWithFavorites { user, favorites }
            })
            .collect())
    }
}
