//! Handlers for the `/planet` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::planet::CreatePlanet;
use holonet_db::repositories::PlanetRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::state::AppState;

/// GET /planet
pub async fn list_planets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let planets = PlanetRepo::list(&state.pool).await?;
    Ok(Json(planets))
}

/// GET /planet/{id}
pub async fn get_planet(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Planet",
            id,
        }))?;

    Ok(Json(planet))
}

/// POST /planet
pub async fn create_planet(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePlanet>,
) -> AppResult<impl IntoResponse> {
    let planet = PlanetRepo::create(&state.pool, &input).await?;

    tracing::info!(planet_id = planet.id, name = %planet.name, "Planet created");

    Ok((StatusCode::CREATED, Json(planet)))
}
