use http::Method;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// Descriptor for one remote operation: HTTP verb plus path template.
///
/// Path templates use `{id}` as the single path-parameter placeholder. All
/// resource facades funnel through this table and one generic dispatch
/// ([`Call`](super::Call)), so the cross-cutting auth/cancellation/error
/// wiring exists exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoint {
    pub(crate) method: Method,
    pub(crate) path: &'static str,
}

impl Endpoint {
    /// Resolves the path template, percent-encoding the identifier.
    pub(crate) fn resolve(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => self
                .path
                .replace("{id}", &utf8_percent_encode(id, NON_ALPHANUMERIC).to_string()),
            None => self.path.to_string(),
        }
    }
}

// Bot
pub(crate) const BOT_LIST: Endpoint = Endpoint { method: Method::GET, path: "/api/v1/bot/" };
pub(crate) const BOT_CREATE: Endpoint = Endpoint { method: Method::POST, path: "/api/v1/bot/" };
pub(crate) const BOT_RETRIEVE: Endpoint = Endpoint { method: Method::GET, path: "/api/v1/bot/{id}/" };
pub(crate) const BOT_UPDATE: Endpoint = Endpoint { method: Method::PATCH, path: "/api/v1/bot/{id}/" };
pub(crate) const BOT_DELETE: Endpoint = Endpoint { method: Method::DELETE, path: "/api/v1/bot/{id}/" };
pub(crate) const BOT_LEAVE_CALL: Endpoint = Endpoint { method: Method::POST, path: "/api/v1/bot/{id}/leave_call/" };
pub(crate) const BOT_DELETE_MEDIA: Endpoint = Endpoint { method: Method::POST, path: "/api/v1/bot/{id}/delete_media/" };

// Calendar events (v2)
pub(crate) const CALENDAR_EVENT_LIST: Endpoint = Endpoint { method: Method::GET, path: "/api/v2/calendar-events/" };
pub(crate) const CALENDAR_EVENT_RETRIEVE: Endpoint = Endpoint { method: Method::GET, path: "/api/v2/calendar-events/{id}/" };
pub(crate) const CALENDAR_EVENT_SCHEDULE_BOT: Endpoint = Endpoint { method: Method::POST, path: "/api/v2/calendar-events/{id}/bot/" };
pub(crate) const CALENDAR_EVENT_UNSCHEDULE_BOT: Endpoint = Endpoint { method: Method::DELETE, path: "/api/v2/calendar-events/{id}/bot/" };

// Calendar accounts (v2)
pub(crate) const CALENDAR_LIST: Endpoint = Endpoint { method: Method::GET, path: "/api/v2/calendars/" };
pub(crate) const CALENDAR_CREATE: Endpoint = Endpoint { method: Method::POST, path: "/api/v2/calendars/" };
pub(crate) const CALENDAR_RETRIEVE: Endpoint = Endpoint { method: Method::GET, path: "/api/v2/calendars/{id}/" };
pub(crate) const CALENDAR_UPDATE: Endpoint = Endpoint { method: Method::PATCH, path: "/api/v2/calendars/{id}/" };
pub(crate) const CALENDAR_DELETE: Endpoint = Endpoint { method: Method::DELETE, path: "/api/v2/calendars/{id}/" };
pub(crate) const CALENDAR_ACCESS_TOKEN: Endpoint = Endpoint { method: Method::POST, path: "/api/v2/calendars/{id}/access_token/" };

// Recording
pub(crate) const RECORDING_LIST: Endpoint = Endpoint { method: Method::GET, path: "/api/v1/recording/" };
pub(crate) const RECORDING_RETRIEVE: Endpoint = Endpoint { method: Method::GET, path: "/api/v1/recording/{id}/" };
pub(crate) const RECORDING_DELETE: Endpoint = Endpoint { method: Method::DELETE, path: "/api/v1/recording/{id}/" };
pub(crate) const RECORDING_CREATE_TRANSCRIPT: Endpoint = Endpoint { method: Method::POST, path: "/api/v1/recording/{id}/create_transcript/" };

// Transcript
pub(crate) const TRANSCRIPT_LIST: Endpoint = Endpoint { method: Method::GET, path: "/api/v1/transcript/" };
pub(crate) const TRANSCRIPT_RETRIEVE: Endpoint = Endpoint { method: Method::GET, path: "/api/v1/transcript/{id}/" };
pub(crate) const TRANSCRIPT_DELETE: Endpoint = Endpoint { method: Method::DELETE, path: "/api/v1/transcript/{id}/" };
pub(crate) const TRANSCRIPT_UPDATE: Endpoint = Endpoint { method: Method::PATCH, path: "/api/v1/transcript/{id}/" };

/// The uniform list/retrieve/update/delete surface of a media artifact family.
#[derive(Debug)]
pub(crate) struct MediaEndpoints {
    pub(crate) list: Endpoint,
    pub(crate) retrieve: Endpoint,
    pub(crate) update: Endpoint,
    pub(crate) delete: Endpoint,
}

pub(crate) const AUDIO_MIXED: MediaEndpoints = MediaEndpoints {
    list: Endpoint { method: Method::GET, path: "/api/v1/audio_mixed/" },
    retrieve: Endpoint { method: Method::GET, path: "/api/v1/audio_mixed/{id}/" },
    update: Endpoint { method: Method::PATCH, path: "/api/v1/audio_mixed/{id}/" },
    delete: Endpoint { method: Method::DELETE, path: "/api/v1/audio_mixed/{id}/" },
};

pub(crate) const AUDIO_SEPARATE: MediaEndpoints = MediaEndpoints {
    list: Endpoint { method: Method::GET, path: "/api/v1/audio_separate/" },
    retrieve: Endpoint { method: Method::GET, path: "/api/v1/audio_separate/{id}/" },
    update: Endpoint { method: Method::PATCH, path: "/api/v1/audio_separate/{id}/" },
    delete: Endpoint { method: Method::DELETE, path: "/api/v1/audio_separate/{id}/" },
};

pub(crate) const VIDEO_MIXED: MediaEndpoints = MediaEndpoints {
    list: Endpoint { method: Method::GET, path: "/api/v1/video_mixed/" },
    retrieve: Endpoint { method: Method::GET, path: "/api/v1/video_mixed/{id}/" },
    update: Endpoint { method: Method::PATCH, path: "/api/v1/video_mixed/{id}/" },
    delete: Endpoint { method: Method::DELETE, path: "/api/v1/video_mixed/{id}/" },
};

pub(crate) const VIDEO_SEPARATE: MediaEndpoints = MediaEndpoints {
    list: Endpoint { method: Method::GET, path: "/api/v1/video_separate/" },
    retrieve: Endpoint { method: Method::GET, path: "/api/v1/video_separate/{id}/" },
    update: Endpoint { method: Method::PATCH, path: "/api/v1/video_separate/{id}/" },
    delete: Endpoint { method: Method::DELETE, path: "/api/v1/video_separate/{id}/" },
};
