//! Artifact, recording, realtime-endpoint and SDK-upload event payloads.
//!
//! The artifact families share one shape — the artifact reference under a
//! family-specific key, the owning bot, the status transition, and the
//! recording — so each family gets a small struct naming its key.

use serde::{Deserialize, Serialize};

use super::shared::{ArtifactRef, BotRef, RecordingRef, StatusData, StatusDataWithError};

/// Data payload of the `audio_mixed.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioMixedData {
    /// The audio artifact.
    pub audio_mixed: ArtifactRef,
    /// The bot that produced it.
    pub bot: BotRef,
    /// The status transition.
    pub data: StatusData,
    /// The recording it belongs to.
    pub recording: RecordingRef,
}

/// Data payload of the `audio_separate.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSeparateData {
    /// The audio artifact.
    pub audio_separate: ArtifactRef,
    /// The bot that produced it.
    pub bot: BotRef,
    /// The status transition.
    pub data: StatusData,
    /// The recording it belongs to.
    pub recording: RecordingRef,
}

/// Data payload of the `video_mixed.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMixedData {
    /// The video artifact.
    pub video_mixed: ArtifactRef,
    /// The bot that produced it.
    pub bot: BotRef,
    /// The status transition.
    pub data: StatusData,
    /// The recording it belongs to.
    pub recording: RecordingRef,
}

/// Data payload of the `video_separate.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSeparateData {
    /// The video artifact.
    pub video_separate: ArtifactRef,
    /// The bot that produced it.
    pub bot: BotRef,
    /// The status transition.
    pub data: StatusData,
    /// The recording it belongs to.
    pub recording: RecordingRef,
}

/// Data payload of the `transcript.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptData {
    /// The transcript artifact.
    pub transcript: ArtifactRef,
    /// The bot that produced it.
    pub bot: BotRef,
    /// The status transition.
    pub data: StatusData,
    /// The recording it belongs to.
    pub recording: RecordingRef,
}

/// Data payload of the `meeting_metadata.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingMetadataData {
    /// The meeting-metadata artifact.
    pub meeting_metadata: ArtifactRef,
    /// The bot that produced it.
    pub bot: BotRef,
    /// The status transition.
    pub data: StatusData,
    /// The recording it belongs to.
    pub recording: RecordingRef,
}

/// Data payload of the `participant_events.*` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantEventsData {
    /// The participant-events artifact.
    pub participant_events: ArtifactRef,
    /// The bot that produced it.
    pub bot: BotRef,
    /// The status transition.
    pub data: StatusData,
    /// The recording it belongs to.
    pub recording: RecordingRef,
}

/// Data payload of `realtime_endpoint.done` and `realtime_endpoint.running`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtimeEndpointData {
    /// The realtime endpoint.
    pub realtime_endpoint: ArtifactRef,
    /// The bot it streams from.
    pub bot: BotRef,
    /// The status transition.
    pub data: StatusData,
    /// The recording it belongs to.
    pub recording: RecordingRef,
}

/// Data payload of `realtime_endpoint.failed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtimeEndpointFailedData {
    /// The realtime endpoint.
    pub realtime_endpoint: ArtifactRef,
    /// The bot it streams from.
    pub bot: BotRef,
    /// The status transition with error details.
    pub data: StatusDataWithError,
    /// The recording it belongs to.
    pub recording: RecordingRef,
}

/// Data payload of the `recording.*` events except `recording.failed`.
///
/// `bot` is absent for recordings not produced by a bot (e.g. desktop SDK
/// uploads).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingEventData {
    /// The recording the event is about.
    pub recording: RecordingRef,
    /// The bot that created the recording, when there is one.
    #[serde(default)]
    pub bot: Option<BotRef>,
    /// The status transition.
    pub data: StatusData,
}

/// Data payload of `recording.failed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingFailedData {
    /// The recording the event is about.
    pub recording: RecordingRef,
    /// The bot that created the recording, when there is one.
    #[serde(default)]
    pub bot: Option<BotRef>,
    /// The status transition with error details.
    pub data: StatusDataWithError,
}

/// Data payload of the `sdk_upload.*` events.
///
/// `recording` is `None` when the upload failed before producing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdkUploadData {
    /// The desktop SDK upload.
    pub sdk_upload: ArtifactRef,
    /// The recording produced by the upload, when it succeeded.
    #[serde(default)]
    pub recording: Option<RecordingRef>,
    /// The status transition.
    pub data: StatusData,
}
