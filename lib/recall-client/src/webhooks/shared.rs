//! Payload fragments shared by several webhook event families.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reference to a bot inside an event payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotRef {
    /// Unique identifier of the bot.
    pub id: String,
    /// Caller-defined metadata attached to the bot.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// Reference to a recording inside an event payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingRef {
    /// Unique identifier of the recording.
    pub id: String,
    /// Caller-defined metadata attached to the recording.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// Reference to a produced artifact (transcript, audio, video, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactRef {
    /// Unique identifier of the artifact.
    pub id: String,
    /// Caller-defined metadata attached to the artifact.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

/// Status information with code, optional sub-code, and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusData {
    /// The status code.
    pub code: String,
    /// Optional status sub-code.
    #[serde(default)]
    pub sub_code: Option<String>,
    /// When the status was updated.
    pub updated_at: DateTime<FixedOffset>,
}

/// Machine-readable error attached to failed events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Status information carrying error details, used by `*.failed` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDataWithError {
    /// The status code.
    pub code: String,
    /// Optional status sub-code.
    #[serde(default)]
    pub sub_code: Option<String>,
    /// When the status was updated.
    pub updated_at: DateTime<FixedOffset>,
    /// Details about the error that occurred.
    pub error: ErrorInfo,
}

/// One log line emitted by a bot or an async transcription job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the log was created.
    pub created_at: DateTime<FixedOffset>,
    /// Severity level of the log.
    pub level: String,
    /// Content of the log message.
    pub message: String,
    /// Optional identifier of the output the log belongs to.
    #[serde(default)]
    pub output_id: Option<String>,
}
