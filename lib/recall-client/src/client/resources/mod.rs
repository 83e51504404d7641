//! Per-resource operation facades.
//!
//! Each facade is a thin, uniform layer: it picks the operation descriptor,
//! resolves the identifier, and hands everything to the generic
//! [`Call`](super::Call) dispatch. Authentication, idempotency, cancellation
//! and error normalization are applied there, identically for every resource.
//! The rate limits quoted in the operation docs are enforced by the remote
//! service, not by this client.

mod bot;
pub use self::bot::BotApi;

mod calendar;
pub use self::calendar::{CalendarAccountsApi, CalendarApi, CalendarEventsApi};

mod recording;
pub use self::recording::RecordingApi;

mod transcript;
pub use self::transcript::TranscriptApi;

mod media;
pub use self::media::{AudioApi, MediaArtifactApi, VideoApi};
