//! Release Tagger - GitHub Tag and Release Creation
//!
//! Formats a tag identifier (`{slug}-v{version}`) and message
//! (`{name} v{version}`), then creates an annotated tag on a commit and,
//! unless the version is a beta, a release for that tag.
//!
//! Every remote call is attempted once. Running twice with the same inputs
//! fails the second time because the tag already exists.

pub mod cli;
pub mod error;
pub mod github;
pub mod host;
pub mod repository;
pub mod request;
pub mod tagger;

pub use cli::{Args, Config};
pub use error::TaggerError;
pub use github::GitHubHost;
pub use host::{CreatedRelease, CreatedTag, TagHost};
pub use repository::Repository;
pub use request::{Params, Plan, TagRequest, is_beta};
pub use tagger::{Prepared, Published, Tagger};
