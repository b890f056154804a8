//! Favorite models and DTOs.

use holonet_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::people::People;
use super::planet::Planet;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `favorite` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub people_id: Option<DbId>,
    pub planet_id: Option<DbId>,
}

/// Flat row produced by joining `favorite` with `people` and `planet`.
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteDetailRow {
    pub id: DbId,
    pub user_id: DbId,
    pub people_id: Option<DbId>,
    pub people_name: Option<String>,
    pub planet_id: Option<DbId>,
    pub planet_name: Option<String>,
}

/// A favorite with its referenced entities resolved.
///
/// Serializes as `{ id, people, planet }`; either side is `null` when the
/// row does not reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteDetail {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub user_id: DbId,
    pub people: Option<People>,
    pub planet: Option<Planet>,
}

impl From<FavoriteDetailRow> for FavoriteDetail {
    fn from(row: FavoriteDetailRow) -> Self {
        let people = match (row.people_id, row.people_name) {
            (Some(id), Some(name)) => Some(People { id, name }),
            _ => None,
        };
        let planet = match (row.planet_id, row.planet_name) {
            (Some(id), Some(name)) => Some(Planet { id, name }),
            _ => None,
        };
        Self {
            id: row.id,
            user_id: row.user_id,
            people,
            planet,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /favorite/{kind}/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFavorite {
    #[validate(range(min = 1))]
    pub user_id: DbId,
}
