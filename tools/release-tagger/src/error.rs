//! Error types for the release tagger.

use thiserror::Error;

/// Everything that can stop a tagging run.
///
/// None of these are retried; they surface to `main` and end the process
/// with a non-zero status.
#[derive(Debug, Error)]
pub enum TaggerError {
    /// No token from `--token`, `RELEASE_TAGGER_TOKEN`, or the positional fallback.
    #[error(
        "missing access token: set RELEASE_TAGGER_TOKEN, pass --token, or give it as the first positional argument"
    )]
    MissingToken,

    /// Repository identifier was not of the form `owner/name`.
    #[error("invalid repository '{0}': expected 'owner/name'")]
    InvalidRepository(String),

    /// The tag reference already exists on the remote.
    #[error("tag '{0}' already exists")]
    TagExists(String),

    /// The hosting provider answered with an error response.
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Transport, decoding, or client construction failure.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),
}
