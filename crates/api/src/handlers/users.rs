//! Handlers for users and their nested favorites.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use holonet_core::error::CoreError;
use holonet_core::types::DbId;
use holonet_db::models::user::CreateUser;
use holonet_db::repositories::UserRepo;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::state::AppState;

/// GET /user
///
/// Placeholder greeting kept for clients that probe it.
pub async fn hello() -> impl IntoResponse {
    Json(json!({ "msg": "Hello, this is your GET /user response " }))
}

/// GET /users
///
/// Every user with their favorites resolved.
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list_with_favorites(&state.pool).await?;
    Ok(Json(users))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_with_favorites(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(user))
}

/// POST /users
///
/// Returns 409 if the email is already registered.
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}
