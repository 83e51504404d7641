use serde_json::Value;

/// Maximum number of response-body bytes kept in decode-failure messages.
pub(crate) const BODY_MAX_LENGTH: usize = 1024;

/// Errors produced by [`RecallClient`](super::RecallClient) operations.
///
/// Every request either resolves with the deserialized payload or fails with
/// exactly one of these variants. Transport failures are passed through
/// unwrapped; an error that is already a `RecallError` is never wrapped a
/// second time.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum RecallError {
    /// The Recall API answered with a non-2xx status.
    ///
    /// Carries the raw payload next to the best-effort extracted `code` and
    /// `detail` fields so callers can branch programmatically without parsing
    /// the human-readable message.
    #[display("{message}")]
    #[from(skip)]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Canonical reason phrase for the status, empty when unknown.
        status_text: String,
        /// The decoded response body; non-JSON bodies are kept as a string value.
        payload: Value,
        /// Machine-readable error code extracted from the payload, if any.
        code: Option<String>,
        /// Human-readable detail extracted from the payload, if any.
        detail: Option<String>,
        /// Extracted or synthesized error message.
        message: String,
    },

    /// The configured deadline elapsed before the exchange settled.
    #[display("Recall request aborted after exceeding timeout of {timeout_ms}ms")]
    #[from(skip)]
    Timeout {
        /// The configured timeout, in milliseconds.
        timeout_ms: u64,
    },

    /// The caller cancelled the request through its cancellation token.
    #[display("Recall request cancelled by caller")]
    Cancelled,

    /// Transport-level failure (connection refused, DNS, TLS, ...).
    ///
    /// Passed through unmodified to preserve the original diagnostic value.
    #[display("{source}")]
    #[from(skip)]
    Transport {
        /// The underlying transport failure.
        #[error(source)]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// No API key was configured on the builder.
    #[display("Recall client requires an API key")]
    MissingApiKey,

    /// The configured request timeout is not a positive duration.
    #[display("Recall client timeout must be a positive duration")]
    InvalidTimeout,

    /// The base URL or a resolved request URL could not be parsed.
    UrlError(url::ParseError),

    /// A header value (API key or idempotency key) contains invalid characters.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// A request body could not be serialized to JSON.
    JsonValueError(serde_json::Error),

    /// Query parameters could not be serialized to a URL query string.
    QuerySerializationError(serde_urlencoded::ser::Error),

    /// A 2xx response body could not be deserialized into the expected type.
    #[display("Failed to deserialize response at '{path}': {error}\n{body}")]
    #[from(skip)]
    Json {
        /// Path of the offending field inside the response body.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse (truncated).
        body: String,
    },
}

impl RecallError {
    /// Builds an [`RecallError::Api`] from a non-2xx response, applying the
    /// message-extraction policy to the decoded payload.
    pub(crate) fn api(status: u16, status_text: impl Into<String>, payload: Value) -> Self {
        let status_text = status_text.into();
        let message = extract_message(&payload, status, &status_text);
        let code = field_as_non_empty_string(&payload, "code");
        let detail = field_as_non_empty_string(&payload, "detail");
        Self::Api {
            status,
            status_text,
            payload,
            code,
            detail,
            message,
        }
    }

    /// HTTP status code, for [`Api`](Self::Api) errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Machine-readable error code, for [`Api`](Self::Api) errors carrying one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Human-readable detail, for [`Api`](Self::Api) errors carrying one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` when the error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns `true` when the remote service answered with a non-2xx status.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

impl From<reqwest::Error> for RecallError {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport {
            source: Box::new(source),
        }
    }
}

fn to_non_empty_string(value: &Value) -> Option<String> {
    let Value::String(text) = value else {
        return None;
    };
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn field_as_non_empty_string(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(to_non_empty_string)
}

/// Extracts the human-readable message from a failure payload.
///
/// Priority: a non-empty string payload verbatim, then the first non-empty of
/// the `error`, `detail`, `message` fields, then a synthesized message naming
/// the status.
fn extract_message(payload: &Value, status: u16, status_text: &str) -> String {
    if let Some(text) = to_non_empty_string(payload) {
        return text;
    }

    for key in ["error", "detail", "message"] {
        if let Some(text) = field_as_non_empty_string(payload, key) {
            return text;
        }
    }

    let mut message = String::from("Recall request failed");
    message.push_str(&format!(" with status {status}"));
    if !status_text.is_empty() {
        message.push_str(&format!(" ({status_text})"));
    }
    message
}

/// Truncates a response body for inclusion in an error message.
pub(crate) fn truncated_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() > BODY_MAX_LENGTH {
        format!("{}... (truncated)", &text[..BODY_MAX_LENGTH])
    } else {
        text.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_recall_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<RecallError>();
        assert_sync::<RecallError>();
    }

    #[test]
    fn test_string_payload_is_used_verbatim() {
        let error = RecallError::api(400, "Bad Request", json!("boom"));
        assert_eq!(error.to_string(), "boom");
    }

    #[rstest]
    #[case::error_first(json!({"error": "e", "detail": "d", "message": "m"}), "e")]
    #[case::detail_next(json!({"error": "", "detail": "d", "message": "m"}), "d")]
    #[case::message_last(json!({"detail": "   ", "message": "m"}), "m")]
    #[case::whitespace_trimmed(json!({"error": "  spaced  "}), "spaced")]
    fn test_message_extraction_priority(#[case] payload: Value, #[case] expected: &str) {
        let error = RecallError::api(400, "Bad Request", payload);
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_synthesized_message_includes_status_and_reason() {
        let error = RecallError::api(404, "Not Found", json!({"unrelated": 1}));
        insta::assert_snapshot!(error, @"Recall request failed with status 404 (Not Found)");
    }

    #[test]
    fn test_synthesized_message_without_status_text() {
        let error = RecallError::api(599, "", json!(null));
        insta::assert_snapshot!(error, @"Recall request failed with status 599");
    }

    #[test]
    fn test_structured_fields_extracted_independently() {
        let payload = json!({
            "code": "bot_initializing",
            "error": "Bad Request",
            "detail": "Bot is already initializing",
        });
        let error = RecallError::api(400, "Bad Request", payload.clone());

        assert_eq!(error.status(), Some(400));
        assert_eq!(error.code(), Some("bot_initializing"));
        assert_eq!(error.detail(), Some("Bot is already initializing"));
        assert_eq!(error.to_string(), "Bad Request");
        let RecallError::Api { payload: raw, .. } = error else {
            panic!("expected an Api error");
        };
        assert_eq!(raw, payload);
    }

    #[test]
    fn test_empty_structured_fields_are_dropped() {
        let error = RecallError::api(400, "Bad Request", json!({"code": "", "detail": "  "}));
        assert_eq!(error.code(), None);
        assert_eq!(error.detail(), None);
    }

    #[test]
    fn test_timeout_display() {
        let error = RecallError::Timeout { timeout_ms: 100 };
        insta::assert_snapshot!(error, @"Recall request aborted after exceeding timeout of 100ms");
        assert!(error.is_timeout());
        assert!(!error.is_api());
    }

    #[test]
    fn test_truncated_body_caps_length() {
        let long = "x".repeat(BODY_MAX_LENGTH + 10);
        let text = truncated_body(long.as_bytes());
        assert!(text.ends_with("... (truncated)"));
        assert!(text.len() < long.len() + 20);

        assert_eq!(truncated_body(b"short"), "short");
    }
}
