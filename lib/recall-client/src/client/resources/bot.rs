use crate::client::{Call, RecallClient, endpoint};
use crate::types::{Bot, BotId, CreateBot, Page, UpdateBot};

/// Meeting-bot operations.
#[derive(Debug, Clone, Copy)]
pub struct BotApi<'c> {
    client: &'c RecallClient,
}

impl<'c> BotApi<'c> {
    pub(crate) fn new(client: &'c RecallClient) -> Self {
        Self { client }
    }

    /// List Bots
    ///
    /// Get a list of all bots. Accepts
    /// [`ListBotsQuery`](crate::types::ListBotsQuery) via
    /// [`with_query`](Call::with_query).
    ///
    /// This endpoint is rate limited to:
    /// - 60 requests per min per workspace
    pub fn list(&self) -> Call<Page<Bot>> {
        Call::new(self.client, endpoint::BOT_LIST, None)
    }

    /// Create Bot
    ///
    /// Create a new bot.
    ///
    /// This endpoint is rate limited to:
    /// - 60 requests per min per workspace
    pub fn create(&self, body: &CreateBot) -> Call<Bot> {
        Call::new(self.client, endpoint::BOT_CREATE, None).with_json(body)
    }

    /// Retrieve Bot
    ///
    /// Get a bot instance.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn retrieve(&self, id: impl Into<BotId>) -> Call<Bot> {
        Call::new(self.client, endpoint::BOT_RETRIEVE, Some(id.into().into()))
    }

    /// Update Scheduled Bot
    ///
    /// Update a scheduled bot that has not yet joined a call.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn update(&self, id: impl Into<BotId>, body: &UpdateBot) -> Call<Bot> {
        Call::new(self.client, endpoint::BOT_UPDATE, Some(id.into().into())).with_json(body)
    }

    /// Delete Scheduled Bot
    ///
    /// Deletes a bot. This can only be done on scheduled bots that have not
    /// yet joined a call.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn delete(&self, id: impl Into<BotId>) -> Call<()> {
        Call::new(self.client, endpoint::BOT_DELETE, Some(id.into().into()))
    }

    /// Remove Bot From Call
    ///
    /// Removes the bot from the meeting. This is irreversible.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn leave_call(&self, id: impl Into<BotId>) -> Call<Bot> {
        Call::new(self.client, endpoint::BOT_LEAVE_CALL, Some(id.into().into()))
    }

    /// Delete Bot Media
    ///
    /// Deletes bot media stored by Recall. This is irreversible.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn delete_media(&self, id: impl Into<BotId>) -> Call<Bot> {
        Call::new(self.client, endpoint::BOT_DELETE_MEDIA, Some(id.into().into()))
    }
}
