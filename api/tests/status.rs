mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_status_is_public() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "GET", "/api/v1/status", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "online" }));

    for uri in ["/api/v1", "/api/v1/"] {
        let (status, _) = send(&app, "GET", uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn test_health_check_pings_storage() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "GET", "/api/v1/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Healthy"));
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "GET", "/api/v1/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/v1/status",
        "/api/v1/health",
        "/api/v1/auth",
        "/api/v1/flights",
        "/api/v1/flights/{id}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }

    assert!(body["components"]["securitySchemes"]["bearerAuth"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (app, _) = test_app();

    let (status, _) = send(&app, "GET", "/api/v2/flights", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
