//! Calendar webhook event payloads.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Event names of the calendar family.
pub const CALENDAR_EVENTS: [&str; 2] = ["calendar.sync_events", "calendar.update"];

/// Data payload of `calendar.update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarUpdateData {
    /// Unique identifier of the calendar.
    pub calendar_id: String,
}

/// Data payload of `calendar.sync_events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSyncEventsData {
    /// Unique identifier of the calendar.
    pub calendar_id: String,
    /// When the calendar was last synced.
    pub last_updated_ts: DateTime<FixedOffset>,
}
