use crate::client::{Call, RecallClient, endpoint};
use crate::types::{Page, Transcript, TranscriptId, UpdateTranscript};

/// Transcript operations.
#[derive(Debug, Clone, Copy)]
pub struct TranscriptApi<'c> {
    client: &'c RecallClient,
}

impl<'c> TranscriptApi<'c> {
    pub(crate) fn new(client: &'c RecallClient) -> Self {
        Self { client }
    }

    /// List Transcripts
    ///
    /// Accepts [`ListTranscriptsQuery`](crate::types::ListTranscriptsQuery)
    /// via [`with_query`](Call::with_query).
    ///
    /// This endpoint is rate limited to:
    /// - 60 requests per min per workspace
    pub fn list(&self) -> Call<Page<Transcript>> {
        Call::new(self.client, endpoint::TRANSCRIPT_LIST, None)
    }

    /// Retrieve Transcript
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn retrieve(&self, id: impl Into<TranscriptId>) -> Call<Transcript> {
        Call::new(
            self.client,
            endpoint::TRANSCRIPT_RETRIEVE,
            Some(id.into().into()),
        )
    }

    /// Delete Transcript
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn delete(&self, id: impl Into<TranscriptId>) -> Call<()> {
        Call::new(
            self.client,
            endpoint::TRANSCRIPT_DELETE,
            Some(id.into().into()),
        )
    }

    /// Update Transcript
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn update(&self, id: impl Into<TranscriptId>, body: &UpdateTranscript) -> Call<Transcript> {
        Call::new(
            self.client,
            endpoint::TRANSCRIPT_UPDATE,
            Some(id.into().into()),
        )
        .with_json(body)
    }
}
