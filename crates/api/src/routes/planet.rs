use axum::routing::get;
use axum::Router;

use crate::handlers::planet;
use crate::state::AppState;

/// ```text
/// GET    /planet         -> list_planets
/// POST   /planet         -> create_planet
/// GET    /planet/{id}    -> get_planet
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planet", get(planet::list_planets).post(planet::create_planet))
        .route("/planet/{id}", get(planet::get_planet))
}
