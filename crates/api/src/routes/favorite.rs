use axum::routing::post;
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// ```text
/// POST   /favorite/people/{id}   -> add_people_favorite
/// DELETE /favorite/people/{id}   -> delete_people_favorite
/// POST   /favorite/planet/{id}   -> add_planet_favorite
/// DELETE /favorite/planet/{id}   -> delete_planet_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/favorite/people/{id}",
            post(favorite::add_people_favorite).delete(favorite::delete_people_favorite),
        )
        .route(
            "/favorite/planet/{id}",
            post(favorite::add_planet_favorite).delete(favorite::delete_planet_favorite),
        )
}
