//! Shared test fixtures: a scriptable [`Transport`] double.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use recall_client::{RawResponse, RecallClient, RecallError, Transport};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use url::Url;

/// What the mock does with an incoming exchange.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Respond immediately.
    Respond { status: u16, body: Value },
    /// Respond after a delay, honoring the cancellation signal meanwhile.
    RespondAfter {
        delay: Duration,
        status: u16,
        body: Value,
    },
    /// Hang until the cancellation signal fires.
    NeverSettle,
    /// Reject immediately with a connection-level failure.
    NetworkError,
}

/// Everything the mock observed about the last exchange.
#[derive(Debug, Clone, Default)]
pub struct Seen {
    pub calls: usize,
    pub method: Option<String>,
    pub url: Option<Url>,
    pub headers: Option<HeaderMap>,
    pub body: Option<Vec<u8>>,
    pub signal: Option<CancellationToken>,
}

#[derive(Debug, Clone)]
pub struct MockTransport {
    behavior: MockBehavior,
    seen: Arc<Mutex<Seen>>,
}

impl MockTransport {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            seen: Arc::new(Mutex::new(Seen::default())),
        }
    }

    pub fn respond(status: u16, body: Value) -> Self {
        Self::new(MockBehavior::Respond { status, body })
    }

    pub fn respond_after(delay: Duration, status: u16, body: Value) -> Self {
        Self::new(MockBehavior::RespondAfter {
            delay,
            status,
            body,
        })
    }

    pub fn never_settle() -> Self {
        Self::new(MockBehavior::NeverSettle)
    }

    pub fn network_error() -> Self {
        Self::new(MockBehavior::NetworkError)
    }

    /// Snapshot of what the transport observed so far.
    pub fn seen(&self) -> Seen {
        self.seen.lock().unwrap().clone()
    }
}

fn response(status: u16, body: &Value) -> RawResponse {
    // `null` stands in for an empty (204-style) body.
    let body = if body.is_null() {
        Bytes::new()
    } else {
        Bytes::from(serde_json::to_vec(body).unwrap())
    };
    RawResponse {
        status: StatusCode::from_u16(status).unwrap(),
        headers: HeaderMap::new(),
        url: Url::parse("https://us-east-1.recall.ai/").unwrap(),
        body,
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn perform(
        &self,
        request: reqwest::Request,
        signal: CancellationToken,
    ) -> Result<RawResponse, RecallError> {
        {
            let mut seen = self.seen.lock().unwrap();
            seen.calls += 1;
            seen.method = Some(request.method().to_string());
            seen.url = Some(request.url().clone());
            seen.headers = Some(request.headers().clone());
            seen.body = request
                .body()
                .and_then(|body| body.as_bytes().map(<[u8]>::to_vec));
            seen.signal = Some(signal.clone());
        }

        match &self.behavior {
            MockBehavior::Respond { status, body } => Ok(response(*status, body)),
            MockBehavior::RespondAfter {
                delay,
                status,
                body,
            } => {
                tokio::select! {
                    () = signal.cancelled() => Err(RecallError::Cancelled),
                    () = tokio::time::sleep(*delay) => Ok(response(*status, body)),
                }
            }
            MockBehavior::NeverSettle => {
                signal.cancelled().await;
                Err(RecallError::Cancelled)
            }
            MockBehavior::NetworkError => Err(RecallError::Transport {
                source: Box::new(std::io::Error::other("network down")),
            }),
        }
    }
}

/// A client wired to the given mock, with a test API key.
pub fn client_with(transport: MockTransport) -> RecallClient {
    RecallClient::builder()
        .with_api_key("test-api-key")
        .with_transport(transport)
        .build()
        .expect("client should build")
}
