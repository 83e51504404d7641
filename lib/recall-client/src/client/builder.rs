use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::auth::{ApiKey, SecureString};
use super::error::RecallError;
use super::transport::{HttpTransport, Transport};
use super::RecallClient;

/// Default Recall API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://us-east-1.recall.ai";

/// Builder for [`RecallClient`] instances.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use recall_client::RecallClient;
///
/// # fn example() -> Result<(), recall_client::RecallError> {
/// let client = RecallClient::builder()
///     .with_api_key("my-api-key")
///     .with_base_url("https://us-west-2.recall.ai")
///     .with_timeout(Duration::from_secs(30))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RecallClientBuilder {
    api_key: Option<SecureString>,
    base_url: String,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl RecallClientBuilder {
    /// Sets the Recall API key.
    ///
    /// The `Token` scheme prefix is added automatically when missing.
    pub fn with_api_key(mut self, api_key: impl Into<SecureString>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the base URL; defaults to [`DEFAULT_BASE_URL`].
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Aborts in-flight requests once they exceed this duration.
    ///
    /// Without a timeout, requests wait on the transport (and any caller
    /// cancellation token) indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the default HTTP transport.
    ///
    /// Mostly useful for tests and for callers that need custom connection
    /// handling; the transport receives fully prepared requests together with
    /// the composed cancellation signal.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Builds the client, validating the configuration.
    ///
    /// # Errors
    ///
    /// - [`RecallError::MissingApiKey`] when no API key was provided.
    /// - [`RecallError::InvalidTimeout`] when the configured timeout is zero.
    /// - [`RecallError::UrlError`] when the base URL cannot be parsed.
    pub fn build(self) -> Result<RecallClient, RecallError> {
        let Self {
            api_key,
            base_url,
            timeout,
            transport,
        } = self;

        let api_key = api_key.ok_or(RecallError::MissingApiKey)?;
        if timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err(RecallError::InvalidTimeout);
        }
        let base_url = base_url.parse::<Url>()?;

        Ok(RecallClient {
            transport: transport.unwrap_or_else(|| Arc::new(HttpTransport::new())),
            base_url,
            api_key: ApiKey::new(api_key),
            timeout,
        })
    }
}

impl Default for RecallClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            transport: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = RecallClientBuilder::default()
            .with_api_key("test-key")
            .build()
            .expect("should build client");

        insta::assert_snapshot!(client.base_url, @"https://us-east-1.recall.ai/");
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let result = RecallClientBuilder::default().build();
        assert!(matches!(result, Err(RecallError::MissingApiKey)));
    }

    #[test]
    fn test_zero_timeout_is_rejected_synchronously() {
        let result = RecallClientBuilder::default()
            .with_api_key("test-key")
            .with_timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(RecallError::InvalidTimeout)));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = RecallClientBuilder::default()
            .with_api_key("test-key")
            .with_base_url("not a url")
            .build();
        assert!(matches!(result, Err(RecallError::UrlError(_))));
    }

    #[test]
    fn test_custom_base_url_and_timeout() {
        let client = RecallClientBuilder::default()
            .with_api_key("test-key")
            .with_base_url("https://eu-central-1.recall.ai")
            .with_timeout(Duration::from_millis(100))
            .build()
            .expect("should build client");

        assert_eq!(client.base_url.as_str(), "https://eu-central-1.recall.ai/");
        assert_eq!(client.timeout, Some(Duration::from_millis(100)));
    }
}
