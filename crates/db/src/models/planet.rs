//! Planet models and DTOs.

use holonet_core::types::DbId;
use holonet_core::validation::NAME_MAX_LEN;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `planet` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Planet {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a planet.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlanet {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
}
