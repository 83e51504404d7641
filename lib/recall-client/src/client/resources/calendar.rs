use crate::client::{Call, RecallClient, endpoint};
use crate::types::{
    Calendar, CalendarAccessToken, CalendarEvent, CalendarEventId, CalendarId, CreateCalendar,
    Page, ScheduleBot, UpdateCalendar,
};

/// Calendar integration operations, grouped into events and accounts.
#[derive(Debug, Clone, Copy)]
pub struct CalendarApi<'c> {
    client: &'c RecallClient,
}

/// Calendar event operations.
#[derive(Debug, Clone, Copy)]
pub struct CalendarEventsApi<'c> {
    client: &'c RecallClient,
}

/// Calendar account operations.
#[derive(Debug, Clone, Copy)]
pub struct CalendarAccountsApi<'c> {
    client: &'c RecallClient,
}

impl<'c> CalendarApi<'c> {
    pub(crate) fn new(client: &'c RecallClient) -> Self {
        Self { client }
    }

    /// Calendar event operations.
    pub fn events(&self) -> CalendarEventsApi<'c> {
        CalendarEventsApi {
            client: self.client,
        }
    }

    /// Calendar account operations.
    pub fn accounts(&self) -> CalendarAccountsApi<'c> {
        CalendarAccountsApi {
            client: self.client,
        }
    }

    /// Shorthand for [`events().list()`](CalendarEventsApi::list).
    pub fn list_events(&self) -> Call<Page<CalendarEvent>> {
        self.events().list()
    }

    /// Shorthand for [`events().retrieve()`](CalendarEventsApi::retrieve).
    pub fn retrieve_event(&self, id: impl Into<CalendarEventId>) -> Call<CalendarEvent> {
        self.events().retrieve(id)
    }

    /// Shorthand for [`events().schedule_bot()`](CalendarEventsApi::schedule_bot).
    pub fn schedule_bot(
        &self,
        id: impl Into<CalendarEventId>,
        body: &ScheduleBot,
    ) -> Call<CalendarEvent> {
        self.events().schedule_bot(id, body)
    }

    /// Shorthand for [`events().unschedule_bot()`](CalendarEventsApi::unschedule_bot).
    pub fn unschedule_bot(&self, id: impl Into<CalendarEventId>) -> Call<CalendarEvent> {
        self.events().unschedule_bot(id)
    }

    /// Shorthand for [`accounts().list()`](CalendarAccountsApi::list).
    pub fn list_calendars(&self) -> Call<Page<Calendar>> {
        self.accounts().list()
    }

    /// Shorthand for [`accounts().create()`](CalendarAccountsApi::create).
    pub fn create_calendar(&self, body: &CreateCalendar) -> Call<Calendar> {
        self.accounts().create(body)
    }

    /// Shorthand for [`accounts().retrieve()`](CalendarAccountsApi::retrieve).
    pub fn retrieve_calendar(&self, id: impl Into<CalendarId>) -> Call<Calendar> {
        self.accounts().retrieve(id)
    }

    /// Shorthand for [`accounts().update()`](CalendarAccountsApi::update).
    pub fn update_calendar(
        &self,
        id: impl Into<CalendarId>,
        body: &UpdateCalendar,
    ) -> Call<Calendar> {
        self.accounts().update(id, body)
    }

    /// Shorthand for [`accounts().delete()`](CalendarAccountsApi::delete).
    pub fn delete_calendar(&self, id: impl Into<CalendarId>) -> Call<()> {
        self.accounts().delete(id)
    }

    /// Shorthand for [`accounts().create_access_token()`](CalendarAccountsApi::create_access_token).
    pub fn create_calendar_access_token(
        &self,
        id: impl Into<CalendarId>,
    ) -> Call<CalendarAccessToken> {
        self.accounts().create_access_token(id)
    }
}

impl CalendarEventsApi<'_> {
    /// List Calendar Events
    ///
    /// Get a list of calendar events. Accepts
    /// [`ListCalendarEventsQuery`](crate::types::ListCalendarEventsQuery) via
    /// [`with_query`](Call::with_query).
    ///
    /// This endpoint is rate limited to:
    /// - 60 requests per min per workspace
    pub fn list(&self) -> Call<Page<CalendarEvent>> {
        Call::new(self.client, endpoint::CALENDAR_EVENT_LIST, None)
    }

    /// Retrieve Calendar Event
    ///
    /// Get a calendar event instance.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn retrieve(&self, id: impl Into<CalendarEventId>) -> Call<CalendarEvent> {
        Call::new(
            self.client,
            endpoint::CALENDAR_EVENT_RETRIEVE,
            Some(id.into().into()),
        )
    }

    /// Schedule Bot For Calendar Event
    ///
    /// Schedule a bot for a calendar event. Returns the updated calendar
    /// event.
    ///
    /// This endpoint is rate limited to:
    /// - 600 requests per min per workspace
    pub fn schedule_bot(
        &self,
        id: impl Into<CalendarEventId>,
        body: &ScheduleBot,
    ) -> Call<CalendarEvent> {
        Call::new(
            self.client,
            endpoint::CALENDAR_EVENT_SCHEDULE_BOT,
            Some(id.into().into()),
        )
        .with_json(body)
    }

    /// Unschedule Bot For Calendar Event
    ///
    /// Remove the scheduled bot from a calendar event. Returns the updated
    /// calendar event.
    ///
    /// This endpoint is rate limited to:
    /// - 600 requests per min per workspace
    pub fn unschedule_bot(&self, id: impl Into<CalendarEventId>) -> Call<CalendarEvent> {
        Call::new(
            self.client,
            endpoint::CALENDAR_EVENT_UNSCHEDULE_BOT,
            Some(id.into().into()),
        )
    }
}

impl CalendarAccountsApi<'_> {
    /// List Calendars
    ///
    /// Get a list of calendars. Accepts
    /// [`ListCalendarsQuery`](crate::types::ListCalendarsQuery) via
    /// [`with_query`](Call::with_query).
    ///
    /// This endpoint is rate limited to:
    /// - 60 requests per min per workspace
    pub fn list(&self) -> Call<Page<Calendar>> {
        Call::new(self.client, endpoint::CALENDAR_LIST, None)
    }

    /// Create Calendar
    ///
    /// Create a new calendar connection.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn create(&self, body: &CreateCalendar) -> Call<Calendar> {
        Call::new(self.client, endpoint::CALENDAR_CREATE, None).with_json(body)
    }

    /// Retrieve Calendar
    ///
    /// Get a calendar instance.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn retrieve(&self, id: impl Into<CalendarId>) -> Call<Calendar> {
        Call::new(
            self.client,
            endpoint::CALENDAR_RETRIEVE,
            Some(id.into().into()),
        )
    }

    /// Update Calendar
    ///
    /// Update an existing calendar connection.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn update(&self, id: impl Into<CalendarId>, body: &UpdateCalendar) -> Call<Calendar> {
        Call::new(
            self.client,
            endpoint::CALENDAR_UPDATE,
            Some(id.into().into()),
        )
        .with_json(body)
    }

    /// Delete Calendar
    ///
    /// Deletes a calendar. This will disconnect the calendar.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn delete(&self, id: impl Into<CalendarId>) -> Call<()> {
        Call::new(
            self.client,
            endpoint::CALENDAR_DELETE,
            Some(id.into().into()),
        )
    }

    /// Get Access Token
    ///
    /// Get the OAuth access token for this calendar account.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn create_access_token(&self, id: impl Into<CalendarId>) -> Call<CalendarAccessToken> {
        Call::new(
            self.client,
            endpoint::CALENDAR_ACCESS_TOKEN,
            Some(id.into().into()),
        )
    }
}
