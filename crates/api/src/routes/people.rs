//! Route definitions for people and their catalog ingestion.

use axum::routing::get;
use axum::Router;

use crate::handlers::{ingest, people};
use crate::state::AppState;

/// ```text
/// GET    /people              -> list_people
/// POST   /people              -> create_people
/// GET    /people/{id}         -> get_people
/// GET    /people-population   -> populate_people
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(people::list_people).post(people::create_people))
        .route("/people/{id}", get(people::get_people))
        .route("/people-population", get(ingest::populate_people))
}
