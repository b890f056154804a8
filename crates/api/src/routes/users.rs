use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// GET    /user          -> hello
/// GET    /users         -> list_users
/// POST   /users         -> create_user
/// GET    /users/{id}    -> get_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", get(users::hello))
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user))
}
