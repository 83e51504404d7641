//! End-to-end exercise of the default reqwest transport against a real HTTP
//! server.

use std::time::Duration;

use axum::Json;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use recall_client::types::CreateBot;
use recall_client::{RecallClient, RecallError};
use serde_json::{Value, json};

fn header(headers: &HeaderMap, name: &str) -> Value {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map_or(Value::Null, |value| Value::String(value.to_string()))
}

async fn retrieve_bot(Path(id): Path<String>, headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "id": id,
        "authorization": header(&headers, "authorization"),
    }))
}

async fn list_bots() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "code": "bot_initializing",
            "error": "Bad Request",
            "detail": "Bot is already initializing",
        })),
    )
}

async fn create_bot(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    (
        StatusCode::CREATED,
        Json(json!({
            "id": "bot-echo",
            "idempotency_key": header(&headers, "idempotency-key"),
        })),
    )
}

async fn hang() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(60)).await;
    Json(json!({"next": null, "previous": null, "results": []}))
}

async fn start_server() -> String {
    let app = Router::new()
        .route("/api/v1/bot/", get(list_bots).post(create_bot))
        .route("/api/v1/bot/{id}/", get(retrieve_bot))
        .route("/api/v1/transcript/", get(hang));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind a local port");
    let addr = listener.local_addr().expect("listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });
    format!("http://{addr}")
}

fn client(base_url: &str) -> RecallClient {
    RecallClient::builder()
        .with_api_key("test-api-key")
        .with_base_url(base_url)
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn retrieves_a_bot_over_the_wire_with_credentials() {
    let base_url = start_server().await;
    let client = client(&base_url);

    let bot = client.bot().retrieve("bot-9").await.expect("should resolve");

    assert_eq!(bot.id.as_str(), "bot-9");
    assert_eq!(bot.extra["authorization"], "Token test-api-key");
}

#[tokio::test]
async fn surfaces_structured_api_errors_from_the_wire() {
    let base_url = start_server().await;
    let client = client(&base_url);

    let error = client.bot().list().await.expect_err("should fail");

    assert_eq!(error.status(), Some(400));
    assert_eq!(error.code(), Some("bot_initializing"));
    assert_eq!(error.detail(), Some("Bot is already initializing"));
    assert_eq!(error.to_string(), "Bad Request");
}

#[tokio::test]
async fn forwards_the_idempotency_key_header() {
    let base_url = start_server().await;
    let client = client(&base_url);

    let bot = client
        .bot()
        .create(&CreateBot::for_meeting("https://zoom.us/j/123"))
        .with_idempotency_key("4f2a9b1c")
        .await
        .expect("should resolve");

    assert_eq!(bot.extra["idempotency_key"], "4f2a9b1c");
}

#[tokio::test]
async fn hanging_routes_reject_with_a_timeout() {
    let base_url = start_server().await;
    let client = RecallClient::builder()
        .with_api_key("test-api-key")
        .with_base_url(&base_url)
        .with_timeout(Duration::from_millis(100))
        .build()
        .expect("client should build");

    let error = client.transcript().list().await.expect_err("should time out");

    assert!(matches!(error, RecallError::Timeout { timeout_ms: 100 }));
}
