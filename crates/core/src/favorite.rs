//! The favorite relationship model.
//!
//! A favorite links a user to exactly one target: a person or a planet.
//! Storage keeps the target as two nullable foreign keys (`people_id`,
//! `planet_id`) with no constraint tying them together, so rows read back
//! from the database may carry both or neither. Writes go through
//! [`FavoriteTarget`], which can only name one.

use std::fmt;

use crate::types::DbId;

/// Which kind of entity a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    People,
    Planet,
}

impl FavoriteKind {
    /// Name of the `favorite` column holding the foreign key for this kind.
    pub fn column(self) -> &'static str {
        match self {
            FavoriteKind::People => "people_id",
            FavoriteKind::Planet => "planet_id",
        }
    }

    /// Entity named in the 404 when no favorite of this kind matches.
    pub fn favorite_entity(self) -> &'static str {
        match self {
            FavoriteKind::People => "Favorite for people",
            FavoriteKind::Planet => "Favorite for planet",
        }
    }

    /// Route segment and message word: `people` or `planet`.
    pub fn as_str(self) -> &'static str {
        match self {
            FavoriteKind::People => "people",
            FavoriteKind::Planet => "planet",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single entity a new favorite refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    People(DbId),
    Planet(DbId),
}

impl FavoriteTarget {
    pub fn kind(&self) -> FavoriteKind {
        match self {
            FavoriteTarget::People(_) => FavoriteKind::People,
            FavoriteTarget::Planet(_) => FavoriteKind::Planet,
        }
    }

    pub fn id(&self) -> DbId {
        match *self {
            FavoriteTarget::People(id) | FavoriteTarget::Planet(id) => id,
        }
    }

    /// Value for the `people_id` column.
    pub fn people_id(&self) -> Option<DbId> {
        match *self {
            FavoriteTarget::People(id) => Some(id),
            FavoriteTarget::Planet(_) => None,
        }
    }

    /// Value for the `planet_id` column.
    pub fn planet_id(&self) -> Option<DbId> {
        match *self {
            FavoriteTarget::Planet(id) => Some(id),
            FavoriteTarget::People(_) => None,
        }
    }
}
