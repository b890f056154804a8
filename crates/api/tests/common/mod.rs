#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::get as route_get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

use holonet_api::config::{CatalogConfig, ServerConfig};
use holonet_api::router::build_app_router;
use holonet_api::state::AppState;
use holonet_catalog::CatalogClient;
use holonet_core::favorite::FavoriteTarget;
use holonet_db::models::people::CreatePeople;
use holonet_db::models::planet::CreatePlanet;
use holonet_db::models::user::CreateUser;
use holonet_db::repositories::{FavoriteRepo, PeopleRepo, PlanetRepo, UserRepo};

/// Catalog URL nothing listens on; tests that ingest pass their own.
const UNUSED_CATALOG_URL: &str = "http://127.0.0.1:9";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(catalog_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        catalog: CatalogConfig {
            base_url: catalog_base_url.to_string(),
            page_limit: 30,
            timeout_secs: 5,
        },
    }
}

/// Build the full application router, including the production middleware
/// stack, on top of the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_catalog(pool, UNUSED_CATALOG_URL)
}

/// Same as [`build_test_app`] but pointing the catalog client at `base_url`.
pub fn build_test_app_with_catalog(pool: SqlitePool, base_url: &str) -> Router {
    let config = test_config(base_url);
    let catalog = CatalogClient::new(base_url, Duration::from_secs(5)).unwrap();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        catalog: Arc::new(catalog),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string()), true).await
}

/// POST a raw body with a JSON content type, for malformed-payload tests.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    send(app, Method::POST, uri, Body::from(body), true).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if json {
        builder = builder.header("content-type", "application/json");
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

pub async fn seed_user(pool: &SqlitePool, name: &str, email: &str) -> i64 {
    let input = CreateUser {
        name: name.to_string(),
        email: email.to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

pub async fn seed_people(pool: &SqlitePool, name: &str) -> i64 {
    let input = CreatePeople {
        name: name.to_string(),
    };
    PeopleRepo::create(pool, &input).await.unwrap().id
}

pub async fn seed_planet(pool: &SqlitePool, name: &str) -> i64 {
    let input = CreatePlanet {
        name: name.to_string(),
    };
    PlanetRepo::create(pool, &input).await.unwrap().id
}

pub async fn seed_favorite(pool: &SqlitePool, user_id: i64, target: FavoriteTarget) -> i64 {
    FavoriteRepo::create(pool, user_id, target).await.unwrap().id
}

// ---------------------------------------------------------------------------
// Fake catalog
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct FakeCatalog {
    base: String,
    names: Vec<String>,
    failing_uid: Option<usize>,
}

/// Serve a SWAPI-shaped catalog on an ephemeral port; returns its base URL.
///
/// If `failing_uid` is set, that person's detail endpoint answers 500.
pub async fn spawn_fake_catalog(names: &[&str], failing_uid: Option<usize>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let state = FakeCatalog {
        base: base.clone(),
        names: names.iter().map(|n| n.to_string()).collect(),
        failing_uid,
    };
    let app = Router::new()
        .route("/people", route_get(fake_list_people))
        .route("/people/{uid}", route_get(fake_person_detail))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    base
}

async fn fake_list_people(State(catalog): State<FakeCatalog>) -> Json<Value> {
    let results: Vec<Value> = catalog
        .names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let uid = i + 1;
            json!({"uid": uid.to_string(), "name": name, "url": format!("{}/people/{uid}", catalog.base)})
        })
        .collect();
    Json(json!({"message": "ok", "total_records": results.len(), "results": results}))
}

async fn fake_person_detail(
    State(catalog): State<FakeCatalog>,
    Path(uid): Path<usize>,
) -> Result<Json<Value>, StatusCode> {
    if catalog.failing_uid == Some(uid) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let name = catalog
        .names
        .get(uid.wrapping_sub(1))
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({
        "message": "ok",
        "result": {"uid": uid.to_string(), "properties": {"name": name}}
    })))
}
