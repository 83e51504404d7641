use crate::client::endpoint::MediaEndpoints;
use crate::client::{Call, RecallClient, endpoint};
use crate::types::{MediaArtifact, MediaArtifactId, Page, UpdateMediaArtifact};

/// Audio artifact operations, split into mixed and separate families.
#[derive(Debug, Clone, Copy)]
pub struct AudioApi<'c> {
    client: &'c RecallClient,
}

/// Video artifact operations, split into mixed and separate families.
#[derive(Debug, Clone, Copy)]
pub struct VideoApi<'c> {
    client: &'c RecallClient,
}

/// Uniform list/retrieve/update/delete surface of one media artifact family.
///
/// All four families (audio/video × mixed/separate) share this facade; only
/// the operation descriptors differ.
#[derive(Debug, Clone, Copy)]
pub struct MediaArtifactApi<'c> {
    client: &'c RecallClient,
    endpoints: &'static MediaEndpoints,
}

impl<'c> AudioApi<'c> {
    pub(crate) fn new(client: &'c RecallClient) -> Self {
        Self { client }
    }

    /// Mixed audio artifacts (one track for the whole call).
    pub fn mixed(&self) -> MediaArtifactApi<'c> {
        MediaArtifactApi {
            client: self.client,
            endpoints: &endpoint::AUDIO_MIXED,
        }
    }

    /// Separate audio artifacts (one track per participant).
    pub fn separate(&self) -> MediaArtifactApi<'c> {
        MediaArtifactApi {
            client: self.client,
            endpoints: &endpoint::AUDIO_SEPARATE,
        }
    }

    /// Shorthand for [`mixed().list()`](MediaArtifactApi::list).
    pub fn list_mixed(&self) -> Call<Page<MediaArtifact>> {
        self.mixed().list()
    }

    /// Shorthand for [`separate().list()`](MediaArtifactApi::list).
    pub fn list_separate(&self) -> Call<Page<MediaArtifact>> {
        self.separate().list()
    }
}

impl<'c> VideoApi<'c> {
    pub(crate) fn new(client: &'c RecallClient) -> Self {
        Self { client }
    }

    /// Mixed video artifacts (one rendering for the whole call).
    pub fn mixed(&self) -> MediaArtifactApi<'c> {
        MediaArtifactApi {
            client: self.client,
            endpoints: &endpoint::VIDEO_MIXED,
        }
    }

    /// Separate video artifacts (one rendering per participant).
    pub fn separate(&self) -> MediaArtifactApi<'c> {
        MediaArtifactApi {
            client: self.client,
            endpoints: &endpoint::VIDEO_SEPARATE,
        }
    }

    /// Shorthand for [`mixed().list()`](MediaArtifactApi::list).
    pub fn list_mixed(&self) -> Call<Page<MediaArtifact>> {
        self.mixed().list()
    }

    /// Shorthand for [`separate().list()`](MediaArtifactApi::list).
    pub fn list_separate(&self) -> Call<Page<MediaArtifact>> {
        self.separate().list()
    }
}

impl MediaArtifactApi<'_> {
    /// List artifacts of this family.
    ///
    /// Accepts [`ListMediaQuery`](crate::types::ListMediaQuery) via
    /// [`with_query`](Call::with_query).
    ///
    /// This endpoint is rate limited to:
    /// - 60 requests per min per workspace
    pub fn list(&self) -> Call<Page<MediaArtifact>> {
        Call::new(self.client, self.endpoints.list.clone(), None)
    }

    /// Retrieve one artifact.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn retrieve(&self, id: impl Into<MediaArtifactId>) -> Call<MediaArtifact> {
        Call::new(
            self.client,
            self.endpoints.retrieve.clone(),
            Some(id.into().into()),
        )
    }

    /// Update one artifact's metadata.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn update(
        &self,
        id: impl Into<MediaArtifactId>,
        body: &UpdateMediaArtifact,
    ) -> Call<MediaArtifact> {
        Call::new(
            self.client,
            self.endpoints.update.clone(),
            Some(id.into().into()),
        )
        .with_json(body)
    }

    /// Delete one artifact. This is irreversible.
    ///
    /// This endpoint is rate limited to:
    /// - 300 requests per min per workspace
    pub fn delete(&self, id: impl Into<MediaArtifactId>) -> Call<()> {
        Call::new(
            self.client,
            self.endpoints.delete.clone(),
            Some(id.into().into()),
        )
    }
}
