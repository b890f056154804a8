//! User models and DTOs.

use holonet_core::types::DbId;
use holonet_core::validation::{EMAIL_MAX_LEN, NAME_MAX_LEN};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::favorite::FavoriteDetail;

/// A row from the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// A user together with every favorite they own.
///
/// Serializes flat: `{ id, name, email, favorites: [...] }`.
#[derive(Debug, Clone, Serialize)]
pub struct UserWithFavorites {
    #[serde(flatten)]
    pub user: User,
    pub favorites: Vec<FavoriteDetail>,
}

/// DTO for creating a user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(email, length(max = EMAIL_MAX_LEN))]
    pub email: String,
}
