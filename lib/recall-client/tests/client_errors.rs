//! Error normalization across the request lifecycle, against a mocked
//! transport.

mod common;

use common::{MockTransport, client_with};
use http::header::AUTHORIZATION;
use recall_client::types::{CreateBot, ListBotsQuery};
use recall_client::{RecallClient, RecallError};
use serde_json::json;

#[tokio::test]
async fn wraps_non_2xx_responses_with_structured_metadata() {
    let payload = json!({
        "code": "bot_initializing",
        "error": "Bad Request",
        "detail": "Bot is already initializing",
    });
    let mock = MockTransport::respond(400, payload.clone());
    let client = client_with(mock.clone());

    let error = client.bot().retrieve("bot-123").await.unwrap_err();

    assert_eq!(error.status(), Some(400));
    assert_eq!(error.code(), Some("bot_initializing"));
    assert_eq!(error.detail(), Some("Bot is already initializing"));
    assert_eq!(error.to_string(), "Bad Request");
    let RecallError::Api {
        payload: raw,
        status_text,
        ..
    } = error
    else {
        panic!("expected an Api error, got {error:?}");
    };
    assert_eq!(raw, payload);
    assert_eq!(status_text, "Bad Request");
    assert_eq!(mock.seen().calls, 1);
}

#[tokio::test]
async fn passes_through_successful_payloads_without_wrapping() {
    let mock = MockTransport::respond(200, json!({"id": "bot-123", "bot_name": "Demo"}));
    let client = client_with(mock.clone());

    let bot = client.bot().retrieve("bot-123").await.unwrap();

    assert_eq!(bot.id.as_str(), "bot-123");
    assert_eq!(bot.extra["bot_name"], "Demo");

    let seen = mock.seen();
    assert_eq!(seen.calls, 1);
    assert_eq!(seen.method.as_deref(), Some("GET"));
    assert_eq!(
        seen.url.unwrap().path(),
        "/api/v1/bot/bot%2D123/",
        "path parameters are percent-encoded"
    );
}

#[tokio::test]
async fn string_error_payloads_are_used_verbatim() {
    let mock = MockTransport::respond(429, json!("Number of requests exceeded"));
    let client = client_with(mock);

    let error = client.bot().list().await.unwrap_err();
    assert_eq!(error.to_string(), "Number of requests exceeded");
    assert_eq!(error.status(), Some(429));
}

#[tokio::test]
async fn unrecognized_error_payloads_get_a_synthesized_message() {
    let mock = MockTransport::respond(404, json!({"unrelated": true}));
    let client = client_with(mock);

    let error = client.bot().retrieve("nope").await.unwrap_err();
    assert_eq!(
        error.to_string(),
        "Recall request failed with status 404 (Not Found)"
    );
}

#[tokio::test]
async fn credential_header_is_derived_from_the_api_key() {
    let mock = MockTransport::respond(200, json!({"id": "bot-1"}));
    let client = client_with(mock.clone());

    client.bot().retrieve("bot-1").await.unwrap();

    let headers = mock.seen().headers.unwrap();
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Token test-api-key");
}

#[tokio::test]
async fn prefixed_api_keys_are_not_double_prefixed() {
    let mock = MockTransport::respond(200, json!({"id": "bot-1"}));
    let client = RecallClient::builder()
        .with_api_key("Token abc")
        .with_transport(mock.clone())
        .build()
        .unwrap();

    client.bot().retrieve("bot-1").await.unwrap();

    let headers = mock.seen().headers.unwrap();
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Token abc");
}

#[tokio::test]
async fn idempotency_key_is_attached_only_when_supplied() {
    let body = CreateBot::for_meeting("https://zoom.us/j/123");

    let mock = MockTransport::respond(201, json!({"id": "bot-1"}));
    let client = client_with(mock.clone());
    client
        .bot()
        .create(&body)
        .with_idempotency_key("4f2a9b1c")
        .await
        .unwrap();
    let headers = mock.seen().headers.unwrap();
    assert_eq!(headers.get("idempotency-key").unwrap(), "4f2a9b1c");

    let mock = MockTransport::respond(201, json!({"id": "bot-2"}));
    let client = client_with(mock.clone());
    client.bot().create(&body).await.unwrap();
    let headers = mock.seen().headers.unwrap();
    assert!(!headers.contains_key("idempotency-key"));
}

#[tokio::test]
async fn request_bodies_are_sent_as_json() {
    let mock = MockTransport::respond(201, json!({"id": "bot-1"}));
    let client = client_with(mock.clone());

    client
        .bot()
        .create(&CreateBot {
            bot_name: Some("Notetaker".to_string()),
            ..CreateBot::for_meeting("https://zoom.us/j/123")
        })
        .await
        .unwrap();

    let seen = mock.seen();
    assert_eq!(seen.method.as_deref(), Some("POST"));
    let sent: serde_json::Value = serde_json::from_slice(&seen.body.unwrap()).unwrap();
    assert_eq!(
        sent,
        json!({"meeting_url": "https://zoom.us/j/123", "bot_name": "Notetaker"})
    );
    let headers = seen.headers.unwrap();
    assert_eq!(headers.get(http::header::CONTENT_TYPE).unwrap(), "application/json");
}

#[tokio::test]
async fn query_parameters_are_encoded_into_the_url() {
    let mock = MockTransport::respond(
        200,
        json!({"next": null, "previous": null, "results": []}),
    );
    let client = client_with(mock.clone());

    let page = client
        .bot()
        .list()
        .with_query(&ListBotsQuery {
            meeting_url: Some("https://zoom.us/j/123".to_string()),
            page: Some("abc".to_string()),
            ..ListBotsQuery::default()
        })
        .await
        .unwrap();

    assert!(page.results.is_empty());
    let url = mock.seen().url.unwrap();
    assert_eq!(
        url.query(),
        Some("meeting_url=https%3A%2F%2Fzoom.us%2Fj%2F123&page=abc")
    );
}

#[tokio::test]
async fn delete_operations_resolve_with_empty_bodies() {
    let mock = MockTransport::respond(204, json!(null));
    let client = client_with(mock.clone());

    client.bot().delete("bot-123").await.unwrap();
    assert_eq!(mock.seen().method.as_deref(), Some("DELETE"));
}

#[tokio::test]
async fn transport_failures_pass_through_unwrapped() {
    let mock = MockTransport::network_error();
    let client = client_with(mock);

    let error = client.bot().list().await.unwrap_err();
    let RecallError::Transport { source } = error else {
        panic!("expected a Transport error, got {error:?}");
    };
    assert_eq!(source.to_string(), "network down");
}
