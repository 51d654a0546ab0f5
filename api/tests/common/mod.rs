#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use flightdeck_api::{config::FlightdeckApiConfig, context::ApiContext, server};
use flightdeck_db::storage::memory::MemoryStorage;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const USERNAME: &str = "testuser";
pub const PASSWORD: &str = "testpassword1";

pub fn test_config() -> FlightdeckApiConfig {
    FlightdeckApiConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        public_url: "http://localhost:3000".into(),
        dump_openapi: false,
        mongodb_uri: "memory".into(),
        db_name: "flightdeck".into(),
        flights_collection: "flights".into(),
        jwt_secret: "integration-test-secret".into(),
        jwt_expiration: "3600s".into(),
        jwt_algorithm: "HS256".into(),
        auth_username: USERNAME.into(),
        auth_password: PASSWORD.into(),
    }
}

pub fn test_context() -> ApiContext {
    ApiContext::with_storage(test_config(), Arc::new(MemoryStorage::new()))
        .expect("test config should be valid")
}

pub fn test_app() -> (Router, ApiContext) {
    let context = test_context();
    let (router, _) = server::make(context.clone());
    (router, context)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    into_json(response).await
}

pub async fn into_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}

pub async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/auth",
        None,
        Some(json!({ "username": USERNAME, "password": PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

pub fn sample_flight() -> Value {
    json!({
        "aircraft": "CSTRC",
        "flightNumber": "AVIO201",
        "schedule": {
            "std": "2025-02-15T14:30:00Z",
            "sta": "2025-02-15T17:30:00Z"
        },
        "departure": "LPPD",
        "destination": "LPLA"
    })
}
