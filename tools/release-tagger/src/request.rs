//! Tag naming and publish plan selection.

use serde::Serialize;

/// Marker that identifies a beta version.
pub const BETA_MARKER: &str = "beta";

/// Invocation parameters, minus the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub version: String,
    pub commit: String,
    pub tag_slug: String,
    pub tag_name: String,
}

/// Tag identifier and message derived from [`Params`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRequest {
    pub tag: String,
    pub message: String,
    pub commit: String,
}

impl TagRequest {
    /// Formats `{slug}-v{version}` and `{name} v{version}`.
    pub fn from_params(params: &Params) -> Self {
        Self {
            tag: format!("{}-v{}", params.tag_slug, params.version),
            message: format!("{} v{}", params.tag_name, params.version),
            commit: params.commit.clone(),
        }
    }
}

/// Returns true when the version string contains the beta marker.
pub fn is_beta(version: &str) -> bool {
    version.contains(BETA_MARKER)
}

/// What gets created on the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Plan {
    /// Annotated tag only.
    TagOnly,
    /// Annotated tag followed by a release for it.
    TagAndRelease { prerelease: bool },
}

impl Plan {
    /// Betas get a bare tag unless `beta_release` asks for a prerelease.
    pub fn for_version(version: &str, beta_release: bool) -> Self {
        match (is_beta(version), beta_release) {
            (false, _) => Plan::TagAndRelease { prerelease: false },
            (true, false) => Plan::TagOnly,
            (true, true) => Plan::TagAndRelease { prerelease: true },
        }
    }

    pub fn creates_release(&self) -> bool {
        matches!(self, Plan::TagAndRelease { .. })
    }
}
