//! Handlers for the `/people` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::people::CreatePeople;
use holonet_db::repositories::PeopleRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::state::AppState;

/// GET /people
pub async fn list_people(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let people = PeopleRepo::list(&state.pool).await?;
    Ok(Json(people))
}

/// GET /people/{id}
pub async fn get_people(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let person = PeopleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "People",
            id,
        }))?;

    Ok(Json(person))
}

/// POST /people
pub async fn create_people(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePeople>,
) -> AppResult<impl IntoResponse> {
    let person = PeopleRepo::create(&state.pool, &input).await?;

    tracing::info!(people_id = person.id, name = %person.name, "Person created");

    Ok((StatusCode::CREATED, Json(person)))
}
