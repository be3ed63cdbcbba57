//! Handler/status mapping tests driving the router directly with an
//! in-memory store, no sockets or database involved.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::{build_router, ServerState};
use service::entity::{EntityService, EntityStore, MemoryEntityStore};

fn app() -> Router {
    let store: Arc<dyn EntityStore> = Arc::new(MemoryEntityStore::new());
    let state = ServerState { entities: Arc::new(EntityService::new(store)) };
    build_router(CorsLayer::very_permissive(), state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_ok() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_returns_201_with_assigned_id() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/entities", Some(json!({"field": "a"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["field"], "a");
}

#[tokio::test]
async fn create_with_empty_body_stores_null_field() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/entities", Some(json!({}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["field"], Value::Null);
}

#[tokio::test]
async fn get_missing_is_404_with_error_envelope() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/entities/999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn list_returns_rows_in_creation_order() {
    let app = app();
    send(&app, Method::POST, "/entities", Some(json!({"field": "a"}))).await;
    send(&app, Method::POST, "/entities", Some(json!({"field": "b"}))).await;
    let (status, body) = send(&app, Method::GET, "/entities", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["field"], "a");
    assert_eq!(rows[1]["field"], "b");
}

#[tokio::test]
async fn put_replaces_field_even_with_null() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/entities", Some(json!({"field": "a"}))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) =
        send(&app, Method::PUT, &format!("/entities/{}", id), Some(json!({"field": "b"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["field"], "b");

    // PUT with no field clears the attribute
    let (status, body) = send(&app, Method::PUT, &format!("/entities/{}", id), Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["field"], Value::Null);
}

#[tokio::test]
async fn put_ignores_identifier_in_body() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/entities", Some(json!({"field": "a"}))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/entities/{}", id),
        Some(json!({"id": 424242, "field": "renamed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["field"], "renamed");
}

#[tokio::test]
async fn put_missing_is_404() {
    let app = app();
    let (status, body) =
        send(&app, Method::PUT, "/entities/999999", Some(json!({"field": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn patch_with_empty_body_changes_nothing() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/entities", Some(json!({"field": "a"}))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::PATCH, &format!("/entities/{}", id), Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["field"], "a");
}

#[tokio::test]
async fn patch_with_value_overwrites() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/entities", Some(json!({"field": "a"}))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) =
        send(&app, Method::PATCH, &format!("/entities/{}", id), Some(json!({"field": "b"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["field"], "b");
}

#[tokio::test]
async fn delete_is_204_then_404() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/entities", Some(json!({"field": "a"}))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/entities/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::DELETE, &format!("/entities/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, &format!("/entities/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/entities"].is_object());
    assert!(body["paths"]["/entities/{id}"].is_object());
}
