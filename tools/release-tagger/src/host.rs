//! The hosting-provider seam.

use async_trait::async_trait;
use serde::Serialize;

use crate::{error::TaggerError, request::TagRequest};

/// A tag reference created on the remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedTag {
    pub tag: String,
    /// SHA of the annotated tag object.
    pub sha: String,
}

/// A release created on the remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedRelease {
    pub id: u64,
    pub tag: String,
    pub html_url: Option<String>,
}

/// Operations the tagger needs from a hosting provider.
///
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait TagHost: Send + Sync {
    /// Creates an annotated tag on `request.commit` and its `refs/tags/` reference.
    async fn create_tag(&self, request: &TagRequest) -> Result<CreatedTag, TaggerError>;

    /// Creates a release for an existing tag, named and described by the tag message.
    async fn create_release(
        &self,
        request: &TagRequest,
        prerelease: bool,
    ) -> Result<CreatedRelease, TaggerError>;
}
