//! GitHub implementation of [`TagHost`] over the REST API.

use async_trait::async_trait;
use octocrab::{Octocrab, service::middleware::retry::RetryConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::TaggerError,
    host::{CreatedRelease, CreatedTag, TagHost},
    repository::Repository,
    request::TagRequest,
};

/// Object type of every tag this tool creates.
const TAG_OBJECT_TYPE: &str = "commit";

#[derive(Debug, Serialize)]
struct NewTagObject<'a> {
    tag: &'a str,
    message: &'a str,
    object: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
}

#[derive(Debug, Deserialize)]
struct TagObject {
    sha: String,
}

#[derive(Debug, Serialize)]
struct NewReference<'a> {
    #[serde(rename = "ref")]
    reference: String,
    sha: &'a str,
}

#[derive(Debug, Deserialize)]
struct Reference {
    #[serde(rename = "ref")]
    reference: String,
}

#[derive(Debug, Serialize)]
struct NewRelease<'a> {
    tag_name: &'a str,
    target_commitish: &'a str,
    name: &'a str,
    body: &'a str,
    draft: bool,
    prerelease: bool,
}

#[derive(Debug, Deserialize)]
struct Release {
    id: u64,
    tag_name: String,
    html_url: Option<String>,
}

/// GitHub client scoped to a single repository.
pub struct GitHubHost {
    client: Octocrab,
    repository: Repository,
}

impl GitHubHost {
    /// Builds an authenticated client. `api_url` overrides `https://api.github.com`.
    pub fn new(
        token: &str,
        repository: Repository,
        api_url: Option<&str>,
    ) -> Result<Self, TaggerError> {
        let mut builder = Octocrab::builder()
            .personal_token(token.to_string())
            .add_retry_config(RetryConfig::None);

        if let Some(url) = api_url {
            builder = builder.base_uri(url)?;
        }

        Ok(Self {
            client: builder.build()?,
            repository,
        })
    }

    fn route(&self, path: &str) -> String {
        format!(
            "/repos/{}/{}/{path}",
            self.repository.owner, self.repository.name
        )
    }
}

/// Turns GitHub error responses into [`TaggerError`] variants.
fn map_error(err: octocrab::Error, tag: &str) -> TaggerError {
    match err {
        octocrab::Error::GitHub { source, .. } => {
            let status = source.status_code.as_u16();
            if status == 422 && source.message.contains("already exists") {
                TaggerError::TagExists(tag.to_string())
            } else {
                TaggerError::Rejected {
                    status,
                    message: source.message.clone(),
                }
            }
        }
        other => TaggerError::Api(other),
    }
}

#[async_trait]
impl TagHost for GitHubHost {
    async fn create_tag(&self, request: &TagRequest) -> Result<CreatedTag, TaggerError> {
        let object: TagObject = self
            .client
            .post(
                self.route("git/tags"),
                Some(&NewTagObject {
                    tag: &request.tag,
                    message: &request.message,
                    object: &request.commit,
                    kind: TAG_OBJECT_TYPE,
                }),
            )
            .await
            .map_err(|e| map_error(e, &request.tag))?;
        debug!(tag = %request.tag, sha = %object.sha, "created tag object");

        let reference: Reference = self
            .client
            .post(
                self.route("git/refs"),
                Some(&NewReference {
                    reference: format!("refs/tags/{}", request.tag),
                    sha: &object.sha,
                }),
            )
            .await
            .map_err(|e| map_error(e, &request.tag))?;
        debug!(reference = %reference.reference, "created tag reference");

        Ok(CreatedTag {
            tag: request.tag.clone(),
            sha: object.sha,
        })
    }

    async fn create_release(
        &self,
        request: &TagRequest,
        prerelease: bool,
    ) -> Result<CreatedRelease, TaggerError> {
        let release: Release = self
            .client
            .post(
                self.route("releases"),
                Some(&NewRelease {
                    tag_name: &request.tag,
                    target_commitish: &request.commit,
                    name: &request.message,
                    body: &request.message,
                    draft: false,
                    prerelease,
                }),
            )
            .await
            .map_err(|e| map_error(e, &request.tag))?;
        debug!(id = release.id, tag = %release.tag_name, "created release");

        Ok(CreatedRelease {
            id: release.id,
            tag: release.tag_name,
            html_url: release.html_url,
        })
    }
}
