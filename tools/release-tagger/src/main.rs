//! Release Tagger - GitHub Tag and Release Creation
//!
//! # Usage
//!
//! ```bash
//! # Token from the environment (preferred)
//! RELEASE_TAGGER_TOKEN=ghp_xxx release-tagger -r pangeacyber/pangea-javascript \
//!     1.2.3 abc123 react-auth "React Auth"
//!
//! # Legacy form with the token as the first positional argument
//! release-tagger -r pangeacyber/pangea-javascript ghp_xxx 1.2.3 abc123 react-auth "React Auth"
//!
//! # Show the tag and plan without calling GitHub
//! release-tagger -r owner/repo --dry-run 2.0.0-beta.1 abc123 core Core
//! ```

use anyhow::Context;
use clap::Parser;
use release_tagger::{Args, Config, GitHubHost, Prepared, Tagger};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn run(config: Config) -> anyhow::Result<()> {
    let prepared = Prepared::new(&config.params, config.beta_release);

    if config.dry_run {
        info!(repository = %config.repository, "dry run, no API calls made");
        println!("{}", serde_json::to_string_pretty(&prepared)?);
        return Ok(());
    }

    let host = GitHubHost::new(
        config.token()?,
        config.repository.clone(),
        config.api_url.as_deref(),
    )
    .context("Failed to build GitHub client")?;

    let published = Tagger::new(host)
        .publish(&prepared)
        .await
        .with_context(|| {
            format!(
                "Failed to publish {} to {}",
                prepared.request.tag, config.repository
            )
        })?;

    println!("{}", serde_json::to_string_pretty(&published)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Config::from(args)).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}
