use std::sync::Arc;
use std::time::Duration;

use url::Url;

mod builder;
pub use self::builder::{DEFAULT_BASE_URL, RecallClientBuilder};

mod auth;
pub use self::auth::SecureString;
use self::auth::ApiKey;

mod call;
pub use self::call::Call;

mod cancel;

mod endpoint;

mod error;
pub use self::error::RecallError;

mod transport;
pub use self::transport::{HttpTransport, RawResponse, Transport};

pub mod resources;
use self::resources::{
    AudioApi, BotApi, CalendarApi, RecordingApi, TranscriptApi, VideoApi,
};

/// Typed client for the Recall.ai meeting-bot API.
///
/// The client is an immutable bundle of configuration — base URL, credential,
/// optional request timeout — plus a shared transport. Cloning it is cheap and
/// clones observe the same connection pool; concurrent requests each own their
/// per-call state, so no synchronization is needed beyond the shared read-only
/// configuration.
///
/// # Example
///
/// ```rust,no_run
/// use recall_client::RecallClient;
/// use recall_client::types::CreateBot;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), recall_client::RecallError> {
/// let client = RecallClient::builder()
///     .with_api_key("my-api-key")
///     .build()?;
///
/// let bot = client
///     .bot()
///     .create(&CreateBot::for_meeting("https://meet.google.com/abc-defg-hij"))
///     .with_idempotency_key("f9f8d1a2")
///     .await?;
///
/// println!("created bot {}", bot.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecallClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) base_url: Url,
    pub(crate) api_key: ApiKey,
    pub(crate) timeout: Option<Duration>,
}

impl RecallClient {
    /// Starts building a client.
    pub fn builder() -> RecallClientBuilder {
        RecallClientBuilder::default()
    }

    /// Creates a client against the default endpoint with just an API key.
    pub fn new(api_key: impl Into<SecureString>) -> Result<Self, RecallError> {
        Self::builder().with_api_key(api_key).build()
    }
}

// Resource facades
impl RecallClient {
    /// Meeting-bot operations.
    pub fn bot(&self) -> BotApi<'_> {
        BotApi::new(self)
    }

    /// Calendar integration operations (accounts and events).
    pub fn calendar(&self) -> CalendarApi<'_> {
        CalendarApi::new(self)
    }

    /// Recording operations.
    pub fn recording(&self) -> RecordingApi<'_> {
        RecordingApi::new(self)
    }

    /// Transcript operations.
    pub fn transcript(&self) -> TranscriptApi<'_> {
        TranscriptApi::new(self)
    }

    /// Audio artifact operations (mixed and separate).
    pub fn audio(&self) -> AudioApi<'_> {
        AudioApi::new(self)
    }

    /// Video artifact operations (mixed and separate).
    pub fn video(&self) -> VideoApi<'_> {
        VideoApi::new(self)
    }
}
