#![doc = r#"
Typed Rust client for the [Recall.ai](https://recall.ai) meeting-bot API.

This crate wraps the raw REST endpoints with ergonomic per-resource facades
(bots, calendars, recordings, transcripts, media artifacts) and adds the
request-level concerns every call needs: credential header injection,
optional idempotency keys, timeouts composed with caller cancellation, and a
small closed error taxonomy. A separate [`webhooks`] module validates the
asynchronous event notifications the platform delivers out-of-band.

# Quick start

```rust,no_run
use std::time::Duration;

use recall_client::RecallClient;
use recall_client::types::CreateBot;

# #[tokio::main]
# async fn main() -> Result<(), recall_client::RecallError> {
let client = RecallClient::builder()
    .with_api_key("my-api-key")
    .with_timeout(Duration::from_secs(30))
    .build()?;

// Send a bot into a meeting.
let bot = client
    .bot()
    .create(&CreateBot::for_meeting("https://meet.google.com/abc-defg-hij"))
    .with_idempotency_key("4f2a9b1c")
    .await?;

// Later: pull it back out.
client.bot().leave_call(&bot).await?;
# Ok(())
# }
```

# Errors, timeouts and cancellation

Every operation resolves with the deserialized payload or rejects with a
[`RecallError`]:

- [`RecallError::Api`] for non-2xx responses, with the extracted `code` /
  `detail` fields and the raw payload;
- [`RecallError::Timeout`] when the configured deadline elapses first;
- [`RecallError::Cancelled`] when the caller's
  [`CancellationToken`](tokio_util::sync::CancellationToken) fires first;
- transport failures pass through unwrapped.

Nothing is retried and nothing is swallowed.

```rust,no_run
use recall_client::{RecallClient, RecallError};

# async fn example(client: RecallClient) {
match client.bot().retrieve("bot-123").await {
    Ok(bot) => println!("bot {}", bot.id),
    Err(error) if error.code() == Some("bot_initializing") => { /* try again later */ }
    Err(RecallError::Timeout { timeout_ms }) => eprintln!("gave up after {timeout_ms}ms"),
    Err(error) => eprintln!("request failed: {error}"),
}
# }
```

# Webhooks

See [`webhooks::parse_webhook`] for validating inbound event payloads; unknown
event names are preserved rather than rejected, so new platform events never
break consumers.
"#]

mod client;
pub use self::client::resources;
pub use self::client::{
    Call, DEFAULT_BASE_URL, HttpTransport, RawResponse, RecallClient, RecallClientBuilder,
    RecallError, SecureString, Transport,
};

pub mod types;

pub mod webhooks;
