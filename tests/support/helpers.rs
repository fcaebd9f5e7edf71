// tests/support/helpers.rs
use super::builders::create_post_body;
use super::mocks::SteppingClock;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use dramaboard::application::dto::{DramaDto, PostDto};
use dramaboard::application::ports::{time::Clock, util::SlugGenerator};
use dramaboard::application::services::ApplicationServices;
use dramaboard::domain::drama::DramaRepository;
use dramaboard::domain::post::{PostReadRepository, PostWriteRepository};
use dramaboard::infrastructure::repositories::InMemoryForumStore;
use dramaboard::infrastructure::util::DefaultSlugGenerator;
use dramaboard::presentation::http::routes::build_router;
use dramaboard::presentation::http::state::HttpState;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

pub fn build_test_state() -> HttpState {
    let store = Arc::new(InMemoryForumStore::new());
    let post_write: Arc<dyn PostWriteRepository> = store.clone();
    let post_read: Arc<dyn PostReadRepository> = store.clone();
    let dramas: Arc<dyn DramaRepository> = store;
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        post_write, post_read, dramas, clock, slugger,
    ));
    HttpState { services }
}

pub async fn make_test_router() -> axum::Router {
    build_router(build_test_state(), &["*".to_string()])
}

/// 実ソケットでルーターを起動し、ベース URL を返す
pub async fn spawn_test_server() -> String {
    let app = make_test_router().await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    format!("http://{addr}")
}

/// リクエストを送り、ステータスと JSON ボディを返す（空ボディは Null）
pub async fn send_json(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let req = builder.body(body).expect("build request");

    let resp = app.clone().oneshot(req).await.expect("router response");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

pub async fn seed_drama(app: &axum::Router, title: &str) -> DramaDto {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/api/v1/dramas",
        Some(json!({ "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed drama failed: {body}");
    serde_json::from_value(body).expect("drama dto")
}

pub async fn seed_post(
    app: &axum::Router,
    title: &str,
    author_id: &str,
    drama_slug: &str,
) -> PostDto {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/api/v1/posts",
        Some(create_post_body(title, author_id, drama_slug)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed post failed: {body}");
    serde_json::from_value(body).expect("post dto")
}

pub async fn join_drama(app: &axum::Router, slug: &str, user_id: &str, color: &str) {
    let (status, body) = send_json(
        app,
        Method::PUT,
        &format!("/api/v1/dramas/{slug}/membership"),
        Some(json!({ "userId": user_id, "color": color })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "join drama failed: {body}");
}

/// ErrorResponse 形式の JSON と期待するステータスを検証する
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
