//! Handlers for favoriting people and planets.
//!
//! Each target kind has its own route pair (`/favorite/people/{id}`,
//! `/favorite/planet/{id}`); both funnel into the same insert and delete.
//! Any other kind is not routed and falls through to the JSON 404.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::favorite::FavoriteTarget;
use holonet_core::types::DbId;
use holonet_db::models::favorite::CreateFavorite;
use holonet_db::repositories::FavoriteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::query::FavoriteOwnerParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /favorite/people/{id}
pub async fn add_people_favorite(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<CreateFavorite>,
) -> AppResult<impl IntoResponse> {
    add_favorite(&state, FavoriteTarget::People(id), input).await
}

/// POST /favorite/planet/{id}
pub async fn add_planet_favorite(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<CreateFavorite>,
) -> AppResult<impl IntoResponse> {
    add_favorite(&state, FavoriteTarget::Planet(id), input).await
}

/// DELETE /favorite/people/{id}[?user_id=]
pub async fn delete_people_favorite(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<FavoriteOwnerParams>,
) -> AppResult<impl IntoResponse> {
    delete_favorite(&state, FavoriteTarget::People(id), params).await
}

/// DELETE /favorite/planet/{id}[?user_id=]
pub async fn delete_planet_favorite(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiQuery(params): ApiQuery<FavoriteOwnerParams>,
) -> AppResult<impl IntoResponse> {
    delete_favorite(&state, FavoriteTarget::Planet(id), params).await
}

/// Body: `{ "user_id": <id> }`. An unknown user or target is rejected by the
/// foreign keys and surfaces as 400 `INVALID_REFERENCE`.
async fn add_favorite(
    state: &AppState,
    target: FavoriteTarget,
    input: CreateFavorite,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let favorite = FavoriteRepo::create(&state.pool, input.user_id, target).await?;
    let kind = target.kind();

    tracing::info!(
        favorite_id = favorite.id,
        user_id = input.user_id,
        kind = %kind,
        target_id = target.id(),
        "Favorite created",
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "Favorite {kind} saved successfully"
        ))),
    ))
}

/// Removes the oldest favorite pointing at the target. Without `user_id`
/// that may belong to any user.
async fn delete_favorite(
    state: &AppState,
    target: FavoriteTarget,
    params: FavoriteOwnerParams,
) -> AppResult<Json<MessageResponse>> {
    let deleted = FavoriteRepo::delete_by_target(&state.pool, target, params.user_id).await?;
    let kind = target.kind();

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: kind.favorite_entity(),
            id: target.id(),
        }));
    }

    tracing::info!(
        kind = %kind,
        target_id = target.id(),
        user_id = ?params.user_id,
        "Favorite deleted",
    );

    Ok(Json(MessageResponse::new(format!(
        "Favorite {kind} deleted successfully"
    ))))
}
