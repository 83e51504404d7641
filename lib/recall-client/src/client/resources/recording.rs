use crate::client::{Call, RecallClient, endpoint};
use crate::types::{CreateTranscript, Page, Recording, RecordingId, Transcript};

/// Recording operations.
#[derive(Debug, Clone, Copy)]
pub struct RecordingApi<'c> {
    client: &'c RecallClient,
}

impl<'c> RecordingApi<'c> {
    pub(crate) fn new(client: &'c RecallClient) -> Self {
        Self { client }
    }

    /// List Recordings
    ///
    /// Accepts [`ListRecordingsQuery`](crate::types::ListRecordingsQuery) via
    /// [`with_query`](Call::with_query).
    ///
    /// This endpoint is rate limited to:
    /// - 60 requests per min per workspace
    pub fn list(&self) -> Call<Page<Recording>> {
        Call::new(self.client, endpoint::RECORDING_LIST, None)
    }

    /// Retrieve Recording
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn retrieve(&self, id: impl Into<RecordingId>) -> Call<Recording> {
        Call::new(
            self.client,
            endpoint::RECORDING_RETRIEVE,
            Some(id.into().into()),
        )
    }

    /// Delete Recording
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn delete(&self, id: impl Into<RecordingId>) -> Call<()> {
        Call::new(
            self.client,
            endpoint::RECORDING_DELETE,
            Some(id.into().into()),
        )
    }

    /// Create Async Transcript
    ///
    /// Run asynchronous transcription on a finished recording.
    ///
    /// This endpoint is rate limited to:
    /// - 5 requests per min per bot
    pub fn create_transcript(
        &self,
        id: impl Into<RecordingId>,
        body: &CreateTranscript,
    ) -> Call<Transcript> {
        Call::new(
            self.client,
            endpoint::RECORDING_CREATE_TRANSCRIPT,
            Some(id.into().into()),
        )
        .with_json(body)
    }
}
