use std::fmt;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use super::error::RecallError;

/// One HTTP exchange, stripped down to what the client needs.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// The URL the exchange was performed against.
    pub url: Url,
    /// The full response body.
    pub body: Bytes,
}

impl RawResponse {
    /// Canonical reason phrase for the status, empty when unknown.
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or_default()
    }

    /// Decodes the body as a JSON value.
    ///
    /// Empty bodies decode as `null`; bodies that are not valid JSON are kept
    /// as a string value so error payloads survive verbatim.
    pub fn json_value(&self) -> Value {
        if self.body.is_empty() {
            return Value::Null;
        }
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&self.body).into_owned()))
    }
}

/// Performs a single prepared HTTP exchange.
///
/// This is the seam between the client and the wire: the client builds the
/// request (URL, headers, body) and composes the cancellation signal; the
/// transport owns connection handling. Implementations must honor the signal —
/// resolving with [`RecallError::Cancelled`] once it fires — and must reject
/// rather than hang on network failure. A transport that ignores the signal
/// only delays its own resources: the caller-visible future is still unblocked
/// by the composed signal.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Performs the exchange, racing it against the cancellation signal.
    async fn perform(
        &self,
        request: reqwest::Request,
        signal: CancellationToken,
    ) -> Result<RawResponse, RecallError>;
}

/// Default [`Transport`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with a fresh connection pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport reusing an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn perform(
        &self,
        request: reqwest::Request,
        signal: CancellationToken,
    ) -> Result<RawResponse, RecallError> {
        debug!(?request, "sending...");
        let exchange = async {
            let response = self.client.execute(request).await?;
            debug!(?response, "...receiving");

            let status = response.status();
            let url = response.url().clone();
            let headers = response.headers().clone();
            let body = response.bytes().await?;
            Ok(RawResponse {
                status,
                headers,
                url,
                body,
            })
        };

        tokio::select! {
            biased;
            () = signal.cancelled() => Err(RecallError::Cancelled),
            result = exchange => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &[u8]) -> RawResponse {
        RawResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            url: Url::parse("https://us-east-1.recall.ai/api/v1/bot/").unwrap(),
            body: Bytes::copy_from_slice(body),
        }
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        assert_eq!(response(b"").json_value(), Value::Null);
    }

    #[test]
    fn test_json_body_decodes_as_value() {
        let value = response(br#"{"id": "bot-123"}"#).json_value();
        assert_eq!(value["id"], "bot-123");
    }

    #[test]
    fn test_non_json_body_is_kept_as_string() {
        let value = response(b"upstream exploded").json_value();
        assert_eq!(value, Value::String("upstream exploded".into()));
    }

    #[test]
    fn test_status_text() {
        let mut raw = response(b"");
        assert_eq!(raw.status_text(), "OK");

        raw.status = StatusCode::from_u16(599).unwrap();
        assert_eq!(raw.status_text(), "");
    }
}
