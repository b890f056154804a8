pub mod favorite;
pub mod health;
pub mod people;
pub mod planet;
pub mod users;

use axum::http::Uri;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /people                       list, create
/// /people/{id}                  get
/// /people-population            ingest one catalog page (GET)
///
/// /planet                       list, create
/// /planet/{id}                  get
///
/// /user                         placeholder greeting
/// /users                        list (with favorites), create
/// /users/{id}                   get (with favorites)
///
/// /favorite/people/{id}         add (POST), remove (DELETE)
/// /favorite/planet/{id}         add (POST), remove (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(people::router())
        .merge(planet::router())
        .merge(users::router())
        .merge(favorite::router())
}

/// Fallback for unmatched paths, including unknown favorite kinds.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
