#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use fyyur_api::config::ServerConfig;
use fyyur_api::router::build_app_router;
use fyyur_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// Goes through the same [`build_app_router`] as `main.rs`, so integration
/// tests exercise the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a venue through the API and return its id.
pub async fn create_venue(pool: &PgPool, name: &str, city: &str, state: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/venues",
        serde_json::json!({
            "name": name,
            "city": city,
            "state": state,
            "address": "335 Delancey Street",
            "genres": ["Jazz"],
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "venue creation failed");
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create an artist through the API and return its id.
pub async fn create_artist(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/artists",
        serde_json::json!({
            "name": name,
            "city": "San Francisco",
            "state": "CA",
            "genres": ["Rock n Roll"],
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "artist creation failed");
    body_json(response).await["id"].as_i64().unwrap()
}

/// Schedule a show through the API and return its id.
pub async fn create_show(pool: &PgPool, artist_id: i64, venue_id: i64, start_time: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/shows",
        serde_json::json!({
            "artist_id": artist_id,
            "venue_id": venue_id,
            "start_time": start_time,
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "show creation failed");
    body_json(response).await["id"].as_i64().unwrap()
}
