//! Runs a publish plan against a [`TagHost`].

use serde::Serialize;
use tracing::info;

use crate::{
    error::TaggerError,
    host::{CreatedRelease, CreatedTag, TagHost},
    request::{Params, Plan, TagRequest},
};

/// What a run would do, computed without touching the remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prepared {
    #[serde(flatten)]
    pub request: TagRequest,
    pub plan: Plan,
}

impl Prepared {
    pub fn new(params: &Params, beta_release: bool) -> Self {
        Self {
            request: TagRequest::from_params(params),
            plan: Plan::for_version(&params.version, beta_release),
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Published {
    pub tag: CreatedTag,
    pub release: Option<CreatedRelease>,
}

/// Creates tags and releases through a host.
pub struct Tagger<H> {
    host: H,
}

impl<H: TagHost> Tagger<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Creates the tag, then the release if the plan asks for one.
    ///
    /// The first failure aborts the run.
    pub async fn publish(&self, prepared: &Prepared) -> Result<Published, TaggerError> {
        let request = &prepared.request;

        info!(
            tag = %request.tag,
            commit = %request.commit,
            release = prepared.plan.creates_release(),
            "creating tag"
        );
        let tag = self.host.create_tag(request).await?;

        let release = match prepared.plan {
            Plan::TagOnly => {
                info!(tag = %request.tag, "beta version, skipping release");
                None
            }
            Plan::TagAndRelease { prerelease } => {
                info!(tag = %request.tag, prerelease, "creating release");
                Some(self.host.create_release(request, prerelease).await?)
            }
        };

        Ok(Published { tag, release })
    }
}
