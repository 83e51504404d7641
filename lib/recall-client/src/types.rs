//! Light typed models for the Recall API resources.
//!
//! These types pin down the fields the client relies on and pass everything
//! else through untouched (`extra` holds fields the model does not name), so
//! additive API changes never break deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page of a cursor-paginated list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// URL of the next page, when more results exist.
    pub next: Option<String>,
    /// URL of the previous page.
    pub previous: Option<String>,
    /// The items on this page.
    pub results: Vec<T>,
}

/// Identifier of a bot.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct BotId(String);

/// Identifier of a calendar account.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct CalendarId(String);

/// Identifier of a calendar event.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct CalendarEventId(String);

/// Identifier of a recording.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct RecordingId(String);

/// Identifier of a transcript.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct TranscriptId(String);

/// Identifier of a media artifact (audio/video, mixed/separate).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[serde(transparent)]
pub struct MediaArtifactId(String);

macro_rules! id_conversions {
    ($id:ident, $model:ident) => {
        impl $id {
            /// The identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $id {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$id> for String {
            fn from(id: $id) -> Self {
                id.0
            }
        }

        impl From<&$model> for $id {
            fn from(model: &$model) -> Self {
                model.id.clone()
            }
        }
    };
}

id_conversions!(BotId, Bot);
id_conversions!(CalendarId, Calendar);
id_conversions!(CalendarEventId, CalendarEvent);
id_conversions!(RecordingId, Recording);
id_conversions!(TranscriptId, Transcript);
id_conversions!(MediaArtifactId, MediaArtifact);

/// A meeting bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    /// Unique identifier of the bot.
    pub id: BotId,
    /// Caller-defined metadata attached at creation.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Remaining fields the model does not pin down.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A connected calendar account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    /// Unique identifier of the calendar.
    pub id: CalendarId,
    /// Calendar platform (`google_calendar`, `microsoft_outlook`, ...).
    pub platform: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An event on a connected calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique identifier of the event.
    pub id: CalendarEventId,
    /// Identifier of the calendar the event belongs to.
    pub calendar_id: Option<CalendarId>,
    /// Meeting URL detected on the event, if any.
    pub meeting_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A recording produced by a bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    /// Unique identifier of the recording.
    pub id: RecordingId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A transcript artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Unique identifier of the transcript.
    pub id: TranscriptId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A media artifact (audio/video, mixed/separate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaArtifact {
    /// Unique identifier of the artifact.
    pub id: MediaArtifactId,
    /// Caller-defined metadata.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// OAuth access token for a connected calendar account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarAccessToken {
    /// The OAuth access token.
    pub access_token: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /api/v1/bot/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateBot {
    /// URL of the meeting the bot should join.
    pub meeting_url: String,
    /// Display name of the bot inside the meeting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
    /// Schedule the bot to join at this time instead of immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_at: Option<String>,
    /// Caller-defined metadata echoed back on the bot and its webhooks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Recording configuration passed through to the platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_config: Option<Value>,
}

impl CreateBot {
    /// A minimal request joining the given meeting URL.
    pub fn for_meeting(meeting_url: impl Into<String>) -> Self {
        Self {
            meeting_url: meeting_url.into(),
            ..Self::default()
        }
    }
}

/// Body for `PATCH /api/v1/bot/{id}/` (scheduled bots only).
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBot {
    /// New join time for the scheduled bot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_at: Option<String>,
    /// New meeting URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_name: Option<String>,
}

/// Body for `POST /api/v2/calendars/`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCalendar {
    /// Calendar platform (`google_calendar`, `microsoft_outlook`, ...).
    pub platform: String,
    /// OAuth client id of the caller's integration.
    pub oauth_client_id: String,
    /// OAuth client secret of the caller's integration.
    pub oauth_client_secret: String,
    /// OAuth refresh token for the end user's calendar.
    pub oauth_refresh_token: String,
}

/// Body for `PATCH /api/v2/calendars/{id}/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCalendar {
    /// Rotated OAuth client id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_client_id: Option<String>,
    /// Rotated OAuth client secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_client_secret: Option<String>,
    /// Rotated OAuth refresh token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_refresh_token: Option<String>,
}

/// Body for `POST /api/v2/calendar-events/{id}/bot/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleBot {
    /// Deduplicates repeated scheduling of the same event series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deduplication_key: Option<String>,
    /// Bot configuration applied when the bot is launched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_config: Option<Value>,
}

/// Body for `POST /api/v1/recording/{id}/create_transcript/`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTranscript {
    /// Transcription provider configuration.
    pub provider: Value,
    /// Enable speaker diarization where the provider supports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diarization: Option<Value>,
}

/// Body for `PATCH /api/v1/transcript/{id}/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTranscript {
    /// Replacement metadata for the transcript.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Body for `PATCH` on media artifacts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateMediaArtifact {
    /// Replacement metadata for the artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// Query parameters for `GET /api/v1/bot/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListBotsQuery {
    /// Only bots joining after this timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_at_after: Option<String>,
    /// Only bots joining before this timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_at_before: Option<String>,
    /// Only bots for this meeting URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,
    /// Cursor of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

/// Query parameters for `GET /api/v2/calendar-events/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListCalendarEventsQuery {
    /// Only events on this calendar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<CalendarId>,
    /// Only events starting at or after this timestamp.
    #[serde(rename = "start_time__gte", skip_serializing_if = "Option::is_none")]
    pub start_time_gte: Option<String>,
    /// Only events starting at or before this timestamp.
    #[serde(rename = "start_time__lte", skip_serializing_if = "Option::is_none")]
    pub start_time_lte: Option<String>,
    /// Cursor of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Query parameters for `GET /api/v2/calendars/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListCalendarsQuery {
    /// Cursor of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Query parameters for `GET /api/v1/recording/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListRecordingsQuery {
    /// Only recordings produced by this bot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<BotId>,
    /// Cursor of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

/// Query parameters for `GET /api/v1/transcript/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListTranscriptsQuery {
    /// Only transcripts of this recording.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_id: Option<RecordingId>,
    /// Cursor of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

/// Query parameters for media artifact listings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListMediaQuery {
    /// Only artifacts of this recording.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_id: Option<RecordingId>,
    /// Only artifacts produced by this bot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<BotId>,
    /// Cursor of the page to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_bot_keeps_unknown_fields() {
        let bot: Bot = serde_json::from_value(json!({
            "id": "bot-123",
            "metadata": {"team": "sales"},
            "bot_name": "Demo",
        }))
        .unwrap();

        assert_eq!(bot.id.as_str(), "bot-123");
        assert_eq!(bot.metadata["team"], "sales");
        assert_eq!(bot.extra["bot_name"], "Demo");
    }

    #[test]
    fn test_id_from_model_reference() {
        let bot: Bot = serde_json::from_value(json!({"id": "bot-123"})).unwrap();
        let id = BotId::from(&bot);
        assert_eq!(id, BotId::from("bot-123"));
        assert_eq!(String::from(id), "bot-123");
    }

    #[test]
    fn test_create_bot_skips_absent_fields() {
        let body = serde_json::to_value(CreateBot::for_meeting("https://zoom.us/j/123")).unwrap();
        assert_eq!(body, json!({"meeting_url": "https://zoom.us/j/123"}));
    }

    #[test]
    fn test_calendar_events_query_uses_dunder_filters() {
        let query = ListCalendarEventsQuery {
            calendar_id: Some("cal-1".into()),
            start_time_gte: Some("2026-01-01T00:00:00Z".to_string()),
            ..ListCalendarEventsQuery::default()
        };
        let encoded = serde_urlencoded::to_string(&query).unwrap();
        assert_eq!(
            encoded,
            "calendar_id=cal-1&start_time__gte=2026-01-01T00%3A00%3A00Z"
        );
    }

    #[test]
    fn test_page_deserializes_cursor_fields() {
        let page: Page<Bot> = serde_json::from_value(json!({
            "next": "https://us-east-1.recall.ai/api/v1/bot/?page=abc",
            "previous": null,
            "results": [{"id": "bot-1"}],
        }))
        .unwrap();

        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 1);
    }
}
