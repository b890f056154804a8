//! HTTP-level tests for the `/people` and `/planet` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, seed_people, seed_planet};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_people_returns_plain_array(pool: SqlitePool) {
    seed_people(&pool, "Luke Skywalker").await;
    seed_people(&pool, "Leia Organa").await;

    let response = get(common::build_test_app(pool), "/people").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["name"], "Luke Skywalker");
    assert!(arr[0]["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_people_empty(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/people").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_people_by_id(pool: SqlitePool) {
    let ids = [
        seed_people(&pool, "Han Solo").await,
        seed_people(&pool, "Chewbacca").await,
    ];

    for (id, name) in ids.iter().zip(["Han Solo", "Chewbacca"]) {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/people/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"id": id, "name": name}));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_people_returns_404(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/people/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_people_id_is_rejected(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/people/luke").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("luke"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_planet_id_is_json_400(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/planet/tatooine").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_people_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/people", serde_json::json!({"name": "Rey"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Rey");
    let id = json["id"].as_i64().unwrap();

    let response = get(common::build_test_app(pool), &format!("/people/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_people_with_empty_name_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/people", serde_json::json!({"name": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Planet
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_planets(pool: SqlitePool) {
    seed_planet(&pool, "Tatooine").await;

    let response = get(common::build_test_app(pool), "/planet").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Tatooine");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_planet_reads_planet_table(pool: SqlitePool) {
    // Person 1 exists, planet 1 exists with a different name.
    seed_people(&pool, "Luke Skywalker").await;
    let planet_id = seed_planet(&pool, "Dagobah").await;

    let response = get(common::build_test_app(pool), &format!("/planet/{planet_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Dagobah");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_planet_does_not_fall_back_to_people(pool: SqlitePool) {
    let person_id = seed_people(&pool, "Luke Skywalker").await;

    let response = get(common::build_test_app(pool), &format!("/planet/{person_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_planet_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/planet", serde_json::json!({"name": "Naboo"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["name"], "Naboo");
}
