//! End-to-end API integration tests
//!
//! These tests drive the HTTP router against an in-memory database:
//! - Team creation, including validation failures
//! - Lookup by id and by name
//! - Renaming and deleting teams

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use standup_store::api;
use standup_store::infrastructure::database;
use tower::util::ServiceExt; // for oneshot

/// Setup test database connection
async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    database::initialize_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    pool
}

async fn setup_app() -> Router {
    api::router(setup_test_db().await)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Creates a team through the API and returns its id
async fn create_team(app: &Router, name: &str) -> i64 {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/teams", json!({ "name": name })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app().await;

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_create_team() {
    let app = setup_app().await;

    let response = app
        .oneshot(json_request("POST", "/api/teams", json!({ "name": "  Alpha  " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["id"].is_i64());
    assert_eq!(json["name"], "Alpha");
}

#[tokio::test]
async fn test_create_team_with_blank_name_is_bad_request() {
    let app = setup_app().await;

    let response = app
        .oneshot(json_request("POST", "/api/teams", json!({ "name": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_create_duplicate_team_is_conflict() {
    let app = setup_app().await;
    create_team(&app, "Alpha").await;

    let response = app
        .oneshot(json_request("POST", "/api/teams", json!({ "name": "Alpha" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_team_by_id() {
    let app = setup_app().await;
    let id = create_team(&app, "Alpha").await;

    let response = app
        .oneshot(empty_request("GET", &format!("/api/teams/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Alpha");
}

#[tokio::test]
async fn test_get_missing_team_is_not_found() {
    let app = setup_app().await;

    let response = app
        .oneshot(empty_request("GET", "/api/teams/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_team_by_name() {
    let app = setup_app().await;
    let id = create_team(&app, "Alpha").await;

    let response = app
        .oneshot(empty_request("GET", "/api/teams/by-name/Alpha"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], id);
}

#[tokio::test]
async fn test_list_team_names_sorted() {
    let app = setup_app().await;
    for name in ["Charlie", "alpha", "Bravo"] {
        create_team(&app, name).await;
    }

    let response = app
        .oneshot(empty_request("GET", "/api/teams"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(["Bravo", "Charlie", "alpha"]));
}

#[tokio::test]
async fn test_rename_team() {
    let app = setup_app().await;
    let id = create_team(&app, "Alpha").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/teams/{}", id),
            json!({ "name": "Alpha Squad" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["name"], "Alpha Squad");

    let response = app
        .oneshot(empty_request("GET", "/api/teams"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!(["Alpha Squad"]));
}

#[tokio::test]
async fn test_rename_missing_team_is_not_found() {
    let app = setup_app().await;

    let response = app
        .oneshot(json_request("PUT", "/api/teams/12", json!({ "name": "Ghost" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_team() {
    let app = setup_app().await;
    let id = create_team(&app, "Alpha").await;

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/api/teams/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request("GET", &format!("/api/teams/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_all_teams() {
    let app = setup_app().await;
    create_team(&app, "Alpha").await;
    create_team(&app, "Bravo").await;

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/teams"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request("GET", "/api/teams"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!([]));
}
