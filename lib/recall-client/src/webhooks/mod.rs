//! Typed validation of Recall webhook payloads.
//!
//! Webhook notifications arrive as a JSON envelope `{event, data}` tagged by
//! the `event` name. [`parse_webhook`] dispatches on that discriminator first
//! and only then validates `data` against the one matching shape:
//!
//! - a known event with valid data becomes the matching [`WebhookEvent`]
//!   variant;
//! - an unknown event name is **not** an error — the platform adds event types
//!   over time — and is preserved as [`WebhookEvent::Unknown`];
//! - a known event whose data fails validation is rejected with
//!   [`WebhookError::Validation`] naming the event and the offending field
//!   path.
//!
//! ```rust
//! use recall_client::webhooks::{WebhookEvent, parse_webhook};
//!
//! # fn example() -> Result<(), recall_client::webhooks::WebhookError> {
//! let payload = serde_json::json!({
//!     "event": "calendar.update",
//!     "data": {"calendar_id": "cal-123"},
//! });
//!
//! match parse_webhook(payload)? {
//!     WebhookEvent::CalendarUpdate(data) => println!("sync {}", data.calendar_id),
//!     WebhookEvent::Unknown(envelope) => println!("ignoring {}", envelope.event),
//!     _ => {}
//! }
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

mod shared;
pub use self::shared::{
    ArtifactRef, BotRef, ErrorInfo, LogEntry, RecordingRef, StatusData, StatusDataWithError,
};

mod bot;
pub use self::bot::{
    BOT_EVENTS, BotCallEndedData, BotLifecycleData, BotLogData, BotStatusChangeData,
    BotStatusCode, BotStatusDetails, BotTerminalData, CallEndedStatus, CallEndedSubCode,
    KnownBotStatusCode, KnownCallEndedSubCode, RequiredSubCodeStatus,
};

mod calendar;
pub use self::calendar::{CALENDAR_EVENTS, CalendarSyncEventsData, CalendarUpdateData};

mod artifact;
pub use self::artifact::{
    AudioMixedData, AudioSeparateData, MeetingMetadataData, ParticipantEventsData,
    RealtimeEndpointData, RealtimeEndpointFailedData, RecordingEventData, RecordingFailedData,
    SdkUploadData, TranscriptData, VideoMixedData, VideoSeparateData,
};

/// The raw `{event, data}` wire shape of a webhook notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEnvelope {
    /// Name of the event, the union discriminator.
    pub event: String,
    /// Event-specific payload, left untouched.
    #[serde(default)]
    pub data: Value,
}

/// Errors produced by webhook payload validation.
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum WebhookError {
    /// The payload is not a `{event, data}` envelope at all.
    #[display("webhook payload is not a valid envelope: {error}")]
    Envelope {
        /// The underlying JSON error.
        error: serde_json::Error,
    },

    /// A known event name whose data does not match the registered shape.
    ///
    /// Distinct from an unknown event, which is not an error.
    #[display("invalid payload for webhook event '{event}' at '{path}': {error}")]
    Validation {
        /// The event name that matched the registry.
        event: String,
        /// Path of the offending field inside `data`.
        path: String,
        /// The underlying JSON error.
        #[error(source)]
        error: serde_json::Error,
    },
}

/// A webhook notification, validated against the known event registry.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WebhookEvent {
    AudioMixedDeleted(AudioMixedData),
    AudioMixedDone(AudioMixedData),
    AudioMixedFailed(AudioMixedData),
    AudioMixedProcessing(AudioMixedData),
    AudioSeparateDeleted(AudioSeparateData),
    AudioSeparateDone(AudioSeparateData),
    AudioSeparateFailed(AudioSeparateData),
    AudioSeparateProcessing(AudioSeparateData),
    BotCallEnded(BotCallEndedData),
    BotDone(BotLifecycleData),
    BotFatal(BotTerminalData),
    BotInCallNotRecording(BotLifecycleData),
    BotInCallRecording(BotLifecycleData),
    BotInWaitingRoom(BotLifecycleData),
    BotJoiningCall(BotLifecycleData),
    BotLog(BotLogData),
    BotOutputLog(BotLogData),
    BotRecordingPermissionAllowed(BotLifecycleData),
    BotRecordingPermissionDenied(BotTerminalData),
    BotStatusChange(BotStatusChangeData),
    CalendarSyncEvents(CalendarSyncEventsData),
    CalendarUpdate(CalendarUpdateData),
    MeetingMetadataDeleted(MeetingMetadataData),
    MeetingMetadataDone(MeetingMetadataData),
    MeetingMetadataFailed(MeetingMetadataData),
    MeetingMetadataProcessing(MeetingMetadataData),
    ParticipantEventsDeleted(ParticipantEventsData),
    ParticipantEventsDone(ParticipantEventsData),
    ParticipantEventsFailed(ParticipantEventsData),
    ParticipantEventsProcessing(ParticipantEventsData),
    RealtimeEndpointDone(RealtimeEndpointData),
    RealtimeEndpointFailed(RealtimeEndpointFailedData),
    RealtimeEndpointRunning(RealtimeEndpointData),
    RecordingDeleted(RecordingEventData),
    RecordingDone(RecordingEventData),
    RecordingFailed(RecordingFailedData),
    RecordingPaused(RecordingEventData),
    RecordingProcessing(RecordingEventData),
    SdkUploadComplete(SdkUploadData),
    SdkUploadFailed(SdkUploadData),
    SdkUploadUploading(SdkUploadData),
    TranscriptDeleted(TranscriptData),
    TranscriptDone(TranscriptData),
    TranscriptFailed(TranscriptData),
    TranscriptProcessing(TranscriptData),
    VideoMixedDeleted(VideoMixedData),
    VideoMixedDone(VideoMixedData),
    VideoMixedFailed(VideoMixedData),
    VideoMixedProcessing(VideoMixedData),
    VideoSeparateDeleted(VideoSeparateData),
    VideoSeparateDone(VideoSeparateData),
    VideoSeparateFailed(VideoSeparateData),
    VideoSeparateProcessing(VideoSeparateData),
    /// An event name outside the known registry, preserved as-is.
    Unknown(WebhookEnvelope),
}

/// Validates a decoded webhook payload against the known event registry.
pub fn parse_webhook(payload: Value) -> Result<WebhookEvent, WebhookError> {
    let envelope: WebhookEnvelope =
        serde_json::from_value(payload).map_err(|error| WebhookError::Envelope { error })?;
    WebhookEvent::from_envelope(envelope)
}

/// Validates a raw webhook body (e.g. straight from the HTTP callback).
pub fn parse_webhook_slice(body: &[u8]) -> Result<WebhookEvent, WebhookError> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|error| WebhookError::Envelope { error })?;
    parse_webhook(payload)
}

/// Validates the `data` field of a known event against its registered shape.
fn data<T: serde::de::DeserializeOwned>(event: &str, data: Value) -> Result<T, WebhookError> {
    serde_path_to_error::deserialize(data).map_err(|error| WebhookError::Validation {
        event: event.to_string(),
        path: error.path().to_string(),
        error: error.into_inner(),
    })
}

impl WebhookEvent {
    /// Dispatches an envelope on its `event` discriminator.
    pub fn from_envelope(envelope: WebhookEnvelope) -> Result<Self, WebhookError> {
        let WebhookEnvelope { event, data: raw } = envelope;
        let parsed = match event.as_str() {
            "audio_mixed.deleted" => Self::AudioMixedDeleted(data(&event, raw)?),
            "audio_mixed.done" => Self::AudioMixedDone(data(&event, raw)?),
            "audio_mixed.failed" => Self::AudioMixedFailed(data(&event, raw)?),
            "audio_mixed.processing" => Self::AudioMixedProcessing(data(&event, raw)?),
            "audio_separate.deleted" => Self::AudioSeparateDeleted(data(&event, raw)?),
            "audio_separate.done" => Self::AudioSeparateDone(data(&event, raw)?),
            "audio_separate.failed" => Self::AudioSeparateFailed(data(&event, raw)?),
            "audio_separate.processing" => Self::AudioSeparateProcessing(data(&event, raw)?),
            "bot.call_ended" => Self::BotCallEnded(data(&event, raw)?),
            "bot.done" => Self::BotDone(data(&event, raw)?),
            "bot.fatal" => Self::BotFatal(data(&event, raw)?),
            "bot.in_call_not_recording" => Self::BotInCallNotRecording(data(&event, raw)?),
            "bot.in_call_recording" => Self::BotInCallRecording(data(&event, raw)?),
            "bot.in_waiting_room" => Self::BotInWaitingRoom(data(&event, raw)?),
            "bot.joining_call" => Self::BotJoiningCall(data(&event, raw)?),
            "bot.log" => Self::BotLog(data(&event, raw)?),
            "bot.output_log" => Self::BotOutputLog(data(&event, raw)?),
            "bot.recording_permission_allowed" => {
                Self::BotRecordingPermissionAllowed(data(&event, raw)?)
            }
            "bot.recording_permission_denied" => {
                Self::BotRecordingPermissionDenied(data(&event, raw)?)
            }
            "bot.status_change" => Self::BotStatusChange(data(&event, raw)?),
            "calendar.sync_events" => Self::CalendarSyncEvents(data(&event, raw)?),
            "calendar.update" => Self::CalendarUpdate(data(&event, raw)?),
            "meeting_metadata.deleted" => Self::MeetingMetadataDeleted(data(&event, raw)?),
            "meeting_metadata.done" => Self::MeetingMetadataDone(data(&event, raw)?),
            "meeting_metadata.failed" => Self::MeetingMetadataFailed(data(&event, raw)?),
            "meeting_metadata.processing" => Self::MeetingMetadataProcessing(data(&event, raw)?),
            "participant_events.deleted" => Self::ParticipantEventsDeleted(data(&event, raw)?),
            "participant_events.done" => Self::ParticipantEventsDone(data(&event, raw)?),
            "participant_events.failed" => Self::ParticipantEventsFailed(data(&event, raw)?),
            "participant_events.processing" => {
                Self::ParticipantEventsProcessing(data(&event, raw)?)
            }
            "realtime_endpoint.done" => Self::RealtimeEndpointDone(data(&event, raw)?),
            "realtime_endpoint.failed" => Self::RealtimeEndpointFailed(data(&event, raw)?),
            "realtime_endpoint.running" => Self::RealtimeEndpointRunning(data(&event, raw)?),
            "recording.deleted" => Self::RecordingDeleted(data(&event, raw)?),
            "recording.done" => Self::RecordingDone(data(&event, raw)?),
            "recording.failed" => Self::RecordingFailed(data(&event, raw)?),
            "recording.paused" => Self::RecordingPaused(data(&event, raw)?),
            "recording.processing" => Self::RecordingProcessing(data(&event, raw)?),
            "sdk_upload.complete" => Self::SdkUploadComplete(data(&event, raw)?),
            "sdk_upload.failed" => Self::SdkUploadFailed(data(&event, raw)?),
            "sdk_upload.uploading" => Self::SdkUploadUploading(data(&event, raw)?),
            "transcript.deleted" => Self::TranscriptDeleted(data(&event, raw)?),
            "transcript.done" => Self::TranscriptDone(data(&event, raw)?),
            "transcript.failed" => Self::TranscriptFailed(data(&event, raw)?),
            "transcript.processing" => Self::TranscriptProcessing(data(&event, raw)?),
            "video_mixed.deleted" => Self::VideoMixedDeleted(data(&event, raw)?),
            "video_mixed.done" => Self::VideoMixedDone(data(&event, raw)?),
            "video_mixed.failed" => Self::VideoMixedFailed(data(&event, raw)?),
            "video_mixed.processing" => Self::VideoMixedProcessing(data(&event, raw)?),
            "video_separate.deleted" => Self::VideoSeparateDeleted(data(&event, raw)?),
            "video_separate.done" => Self::VideoSeparateDone(data(&event, raw)?),
            "video_separate.failed" => Self::VideoSeparateFailed(data(&event, raw)?),
            "video_separate.processing" => Self::VideoSeparateProcessing(data(&event, raw)?),
            _ => Self::Unknown(WebhookEnvelope { event, data: raw }),
        };
        Ok(parsed)
    }

    /// The event name the notification was tagged with.
    pub fn event_name(&self) -> &str {
        match self {
            Self::AudioMixedDeleted(_) => "audio_mixed.deleted",
            Self::AudioMixedDone(_) => "audio_mixed.done",
            Self::AudioMixedFailed(_) => "audio_mixed.failed",
            Self::AudioMixedProcessing(_) => "audio_mixed.processing",
            Self::AudioSeparateDeleted(_) => "audio_separate.deleted",
            Self::AudioSeparateDone(_) => "audio_separate.done",
            Self::AudioSeparateFailed(_) => "audio_separate.failed",
            Self::AudioSeparateProcessing(_) => "audio_separate.processing",
            Self::BotCallEnded(_) => "bot.call_ended",
            Self::BotDone(_) => "bot.done",
            Self::BotFatal(_) => "bot.fatal",
            Self::BotInCallNotRecording(_) => "bot.in_call_not_recording",
            Self::BotInCallRecording(_) => "bot.in_call_recording",
            Self::BotInWaitingRoom(_) => "bot.in_waiting_room",
            Self::BotJoiningCall(_) => "bot.joining_call",
            Self::BotLog(_) => "bot.log",
            Self::BotOutputLog(_) => "bot.output_log",
            Self::BotRecordingPermissionAllowed(_) => "bot.recording_permission_allowed",
            Self::BotRecordingPermissionDenied(_) => "bot.recording_permission_denied",
            Self::BotStatusChange(_) => "bot.status_change",
            Self::CalendarSyncEvents(_) => "calendar.sync_events",
            Self::CalendarUpdate(_) => "calendar.update",
            Self::MeetingMetadataDeleted(_) => "meeting_metadata.deleted",
            Self::MeetingMetadataDone(_) => "meeting_metadata.done",
            Self::MeetingMetadataFailed(_) => "meeting_metadata.failed",
            Self::MeetingMetadataProcessing(_) => "meeting_metadata.processing",
            Self::ParticipantEventsDeleted(_) => "participant_events.deleted",
            Self::ParticipantEventsDone(_) => "participant_events.done",
            Self::ParticipantEventsFailed(_) => "participant_events.failed",
            Self::ParticipantEventsProcessing(_) => "participant_events.processing",
            Self::RealtimeEndpointDone(_) => "realtime_endpoint.done",
            Self::RealtimeEndpointFailed(_) => "realtime_endpoint.failed",
            Self::RealtimeEndpointRunning(_) => "realtime_endpoint.running",
            Self::RecordingDeleted(_) => "recording.deleted",
            Self::RecordingDone(_) => "recording.done",
            Self::RecordingFailed(_) => "recording.failed",
            Self::RecordingPaused(_) => "recording.paused",
            Self::RecordingProcessing(_) => "recording.processing",
            Self::SdkUploadComplete(_) => "sdk_upload.complete",
            Self::SdkUploadFailed(_) => "sdk_upload.failed",
            Self::SdkUploadUploading(_) => "sdk_upload.uploading",
            Self::TranscriptDeleted(_) => "transcript.deleted",
            Self::TranscriptDone(_) => "transcript.done",
            Self::TranscriptFailed(_) => "transcript.failed",
            Self::TranscriptProcessing(_) => "transcript.processing",
            Self::VideoMixedDeleted(_) => "video_mixed.deleted",
            Self::VideoMixedDone(_) => "video_mixed.done",
            Self::VideoMixedFailed(_) => "video_mixed.failed",
            Self::VideoMixedProcessing(_) => "video_mixed.processing",
            Self::VideoSeparateDeleted(_) => "video_separate.deleted",
            Self::VideoSeparateDone(_) => "video_separate.done",
            Self::VideoSeparateFailed(_) => "video_separate.failed",
            Self::VideoSeparateProcessing(_) => "video_separate.processing",
            Self::Unknown(envelope) => &envelope.event,
        }
    }

    /// Returns `true` when the event name is in the known registry.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}
