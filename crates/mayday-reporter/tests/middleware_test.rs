//! Integration tests for the panic-reporting middleware

use std::sync::{Arc, Mutex};

use axum::http::header::CONTENT_TYPE;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::from_fn_with_state,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use tempfile::TempDir;
use tower::ServiceExt;

use mayday_reporter::{report_panics, Reporter, ReporterConfig, TerminalBody, NOTIFIED_TEXT};

#[derive(Clone, Default)]
struct Received(Arc<Mutex<Vec<serde_json::Value>>>);

#[derive(Deserialize)]
struct PayloadField {
    payload: String,
}

async fn hook(State(received): State<Received>, Form(form): Form<PayloadField>) -> &'static str {
    let payload: serde_json::Value = serde_json::from_str(&form.payload).unwrap();
    received.0.lock().unwrap().push(payload);
    "ok"
}

async fn spawn_mock_slack() -> (String, Received) {
    let received = Received::default();
    let app = Router::new()
        .route("/hook", post(hook))
        .with_state(received.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/hook"), received)
}

fn test_app(webhook_url: &str, trace_dir: &TempDir) -> Router {
    let config = ReporterConfig::new()
        .with_username("company")
        .with_token("secret-token")
        .with_webhook_channel("#incidents")
        .with_trace_path(trace_dir.path())
        .with_webhook_url(webhook_url);
    let reporter = Arc::new(Reporter::new(config));

    Router::new()
        .route("/ok", get(|| async { "fine" }))
        .route("/boom", get(|| async {
            let r: &'static str = panic!("handler exploded");
            r
        }))
        .layer(from_fn_with_state(reporter, report_panics))
}

#[tokio::test]
async fn test_panicking_handler_gets_the_terminal_response() {
    let trace_dir = TempDir::new().unwrap();
    let (webhook_url, received) = spawn_mock_slack().await;
    let app = test_app(&webhook_url, &trace_dir);

    let response = app
        .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: TerminalBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.status, 500);
    assert_eq!(body.message, NOTIFIED_TEXT);

    // One trace file and one delivery for the one panic.
    assert_eq!(std::fs::read_dir(trace_dir.path()).unwrap().count(), 1);
    let payloads = received.0.lock().unwrap().clone();
    assert_eq!(payloads.len(), 1);
    let text = payloads[0]["text"].as_str().unwrap();
    assert!(text.contains("uncaught Exception"));
    assert!(text.contains("handler exploded"));
    assert!(text.contains("unknown file"));
}

#[tokio::test]
async fn test_healthy_handlers_pass_through_untouched() {
    let trace_dir = TempDir::new().unwrap();
    let (webhook_url, received) = spawn_mock_slack().await;
    let app = test_app(&webhook_url, &trace_dir);

    let response = app
        .oneshot(Request::get("/ok").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(std::fs::read_dir(trace_dir.path()).unwrap().count(), 0);
    assert!(received.0.lock().unwrap().is_empty());
}
