use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use dramaboard::presentation::http::openapi::docs_router;
use serde_json::Value;
use tower::ServiceExt; // for oneshot

#[tokio::test]
async fn docs_router_serves_openapi_json_with_forum_paths() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024)
        .await
        .unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();

    let paths = doc["paths"].as_object().expect("paths object");
    for path in [
        "/health",
        "/api/v1/posts",
        "/api/v1/posts/vote",
        "/api/v1/posts/{id}",
        "/api/v1/dramas",
        "/api/v1/dramas/{slug}",
        "/api/v1/dramas/{slug}/membership",
    ] {
        assert!(paths.contains_key(path), "missing path {path}");
    }
    assert!(doc["components"]["schemas"]["PostDto"].is_object());
}

#[tokio::test]
async fn docs_root_redirects_to_swagger_ui() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/docs"
    );
}
