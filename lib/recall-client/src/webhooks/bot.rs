//! Bot webhook event payloads and their status-code vocabulary.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::shared::{BotRef, LogEntry, StatusData};

/// Event names of the bot family.
pub const BOT_EVENTS: [&str; 12] = [
    "bot.call_ended",
    "bot.done",
    "bot.fatal",
    "bot.in_call_not_recording",
    "bot.in_call_recording",
    "bot.in_waiting_room",
    "bot.joining_call",
    "bot.log",
    "bot.output_log",
    "bot.recording_permission_allowed",
    "bot.recording_permission_denied",
    "bot.status_change",
];

/// Status codes a bot moves through during its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownBotStatusCode {
    Ready,
    JoiningCall,
    InWaitingRoom,
    InCallNotRecording,
    RecordingPermissionAllowed,
    RecordingPermissionDenied,
    InCallRecording,
    RecordingDone,
    CallEnded,
    Done,
    Fatal,
    AnalysisDone,
    AnalysisFailed,
    MediaExpired,
}

/// A bot status code, keeping unknown future values instead of rejecting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BotStatusCode {
    /// One of the documented status codes.
    Known(KnownBotStatusCode),
    /// A status code this version of the client does not know yet.
    Other(String),
}

/// Machine-readable reasons a call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownCallEndedSubCode {
    CallEndedByHost,
    CallEndedByPlatformIdle,
    CallEndedByPlatformMaxLength,
    CallEndedByPlatformWaitingRoomTimeout,
    TimeoutExceededWaitingRoom,
    TimeoutExceededNooneJoined,
    TimeoutExceededEveryoneLeft,
    TimeoutExceededSilenceDetected,
    TimeoutExceededOnlyBotsDetectedUsingParticipantNames,
    TimeoutExceededOnlyBotsDetectedUsingParticipantEvents,
    TimeoutExceededInCallNotRecording,
    TimeoutExceededInCallRecording,
    TimeoutExceededRecordingPermissionDenied,
    TimeoutExceededMaxDuration,
    BotKickedFromCall,
    BotKickedFromWaitingRoom,
    BotReceivedLeaveCall,
}

/// A call-ended sub-code, keeping unknown future values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallEndedSubCode {
    /// One of the documented sub-codes.
    Known(KnownCallEndedSubCode),
    /// A sub-code this version of the client does not know yet.
    Other(String),
}

/// Data payload of the bot lifecycle events (`bot.joining_call`, `bot.done`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotLifecycleData {
    /// The bot the event is about.
    pub bot: BotRef,
    /// The status transition.
    pub data: StatusData,
}

/// Status carried by `bot.call_ended`; the sub-code names why the call ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallEndedStatus {
    /// The status code.
    pub code: String,
    /// Why the call ended.
    pub sub_code: CallEndedSubCode,
    /// When the status was updated.
    pub updated_at: DateTime<FixedOffset>,
}

/// Data payload of `bot.call_ended`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotCallEndedData {
    /// The bot the event is about.
    pub bot: BotRef,
    /// The status transition including the call-ended reason.
    pub data: CallEndedStatus,
}

/// Status carried by `bot.fatal` and `bot.recording_permission_denied`,
/// where a sub-code is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSubCodeStatus {
    /// The status code.
    pub code: String,
    /// Machine-readable reason for the status.
    pub sub_code: String,
    /// When the status was updated.
    pub updated_at: DateTime<FixedOffset>,
}

/// Data payload of `bot.fatal` and `bot.recording_permission_denied`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotTerminalData {
    /// The bot the event is about.
    pub bot: BotRef,
    /// The status transition including its reason.
    pub data: RequiredSubCodeStatus,
}

/// Data payload of `bot.log` and `bot.output_log`.
///
/// `bot_id` is present for bot logs; `job_id` for async transcription job
/// logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotLogData {
    /// The bot the log belongs to, when emitted by a bot.
    #[serde(default)]
    pub bot_id: Option<String>,
    /// The job the log belongs to, when emitted by an async job.
    #[serde(default)]
    pub job_id: Option<String>,
    /// The log line.
    pub log: LogEntry,
}

/// Detailed bot status carried by `bot.status_change`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotStatusDetails {
    /// The status code of the bot.
    pub code: BotStatusCode,
    /// When the status was created.
    pub created_at: DateTime<FixedOffset>,
    /// Optional status message.
    #[serde(default)]
    pub message: Option<String>,
    /// Optional status sub-code.
    #[serde(default)]
    pub sub_code: Option<String>,
}

/// Data payload of `bot.status_change`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotStatusChangeData {
    /// The Recall bot id.
    pub bot_id: String,
    /// The status of the bot.
    pub status: BotStatusDetails,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_known_status_code_round_trips() {
        let code: BotStatusCode = serde_json::from_value(json!("in_call_recording")).unwrap();
        assert_eq!(code, BotStatusCode::Known(KnownBotStatusCode::InCallRecording));
        assert_eq!(serde_json::to_value(&code).unwrap(), json!("in_call_recording"));
    }

    #[test]
    fn test_unknown_status_code_is_preserved() {
        let code: BotStatusCode = serde_json::from_value(json!("doing_a_backflip")).unwrap();
        assert_eq!(code, BotStatusCode::Other("doing_a_backflip".to_string()));
    }

    #[test]
    fn test_call_ended_sub_code_vocabulary() {
        let sub_code: CallEndedSubCode =
            serde_json::from_value(json!("timeout_exceeded_everyone_left")).unwrap();
        assert_eq!(
            sub_code,
            CallEndedSubCode::Known(KnownCallEndedSubCode::TimeoutExceededEveryoneLeft)
        );
    }
}
