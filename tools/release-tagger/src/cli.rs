//! Command-line surface and configuration resolution.

use std::fmt;

use clap::Parser;

use crate::{error::TaggerError, repository::Repository, request::Params};

/// Creates a tag, and a release for non-beta versions, on a GitHub repository.
#[derive(Parser, Debug, Clone)]
#[command(name = "release-tagger")]
#[command(about = "Creates GitHub tags and releases for a component version")]
pub struct Args {
    /// [TOKEN] VERSION COMMIT TAG_SLUG TAG_NAME.
    /// The leading token is only a fallback for --token / RELEASE_TAGGER_TOKEN.
    #[arg(num_args = 4..=5, required = true, value_name = "INPUTS")]
    pub inputs: Vec<String>,

    /// GitHub access token.
    #[arg(long, env = "RELEASE_TAGGER_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Target repository as owner/name.
    #[arg(short, long, env = "RELEASE_TAGGER_REPOSITORY")]
    pub repository: Repository,

    /// GitHub API base URL (defaults to https://api.github.com).
    #[arg(long, env = "RELEASE_TAGGER_API_URL")]
    pub api_url: Option<String>,

    /// Also create a prerelease for beta versions instead of a bare tag.
    #[arg(long, env = "RELEASE_TAGGER_BETA_RELEASE")]
    pub beta_release: bool,

    /// Print what would be created without calling the API.
    #[arg(long)]
    pub dry_run: bool,

    /// Log filter directive.
    #[arg(long, env = "RELEASE_TAGGER_LOG", default_value = "info")]
    pub log_level: String,
}

/// Fully resolved settings for one run.
#[derive(Clone)]
pub struct Config {
    token: Option<String>,
    pub repository: Repository,
    pub api_url: Option<String>,
    pub params: Params,
    pub beta_release: bool,
    pub dry_run: bool,
}

impl Config {
    /// The access token, required only when calling the API.
    pub fn token(&self) -> Result<&str, TaggerError> {
        self.token.as_deref().ok_or(TaggerError::MissingToken)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("repository", &self.repository)
            .field("api_url", &self.api_url)
            .field("params", &self.params)
            .field("beta_release", &self.beta_release)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let mut inputs = args.inputs.into_iter();
        let positional_token = if inputs.len() == 5 { inputs.next() } else { None };

        // An empty flag or env value counts as absent.
        let token = args
            .token
            .filter(|t| !t.is_empty())
            .or(positional_token)
            .filter(|t| !t.is_empty());

        // clap guarantees four values remain
        let mut next = || inputs.next().unwrap_or_default();
        let params = Params {
            version: next(),
            commit: next(),
            tag_slug: next(),
            tag_name: next(),
        };

        Self {
            token,
            repository: args.repository,
            api_url: args.api_url,
            params,
            beta_release: args.beta_release,
            dry_run: args.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses with an explicit empty `--token` so an exported
    /// `RELEASE_TAGGER_TOKEN` cannot leak into the result.
    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(
            ["release-tagger", "--repository", "acme/widgets", "--token="]
                .iter()
                .chain(argv),
        )
    }

    fn parse_with_token(token: &str, argv: &[&str]) -> Result<Args, clap::Error> {
        let flag = format!("--token={token}");
        Args::try_parse_from(
            ["release-tagger", "--repository", "acme/widgets", flag.as_str()]
                .iter()
                .chain(argv),
        )
    }

    #[test]
    fn five_positionals_use_leading_token() {
        let config = Config::from(parse(&["t", "1.2.3", "abc123", "core", "Core"]).unwrap());

        assert_eq!(config.token().unwrap(), "t");
        assert_eq!(
            config.params,
            Params {
                version: "1.2.3".to_string(),
                commit: "abc123".to_string(),
                tag_slug: "core".to_string(),
                tag_name: "Core".to_string(),
            }
        );
        assert_eq!(config.repository.to_string(), "acme/widgets");
        assert!(!config.dry_run);
    }

    #[test]
    fn empty_token_falls_back_to_positional() {
        let args = parse(&["positional", "1.2.3", "abc123", "core", "Core"]).unwrap();
        assert_eq!(args.token.as_deref(), Some(""));

        let config = Config::from(args);
        assert_eq!(config.token().unwrap(), "positional");
    }

    #[test]
    fn token_flag_wins_over_positional() {
        let args = parse_with_token("flag", &["t", "1.2.3", "abc123", "core", "Core"]).unwrap();
        let config = Config::from(args);
        assert_eq!(config.token().unwrap(), "flag");
        assert_eq!(config.params.version, "1.2.3");
    }

    #[test]
    fn four_positionals_take_token_from_flag() {
        let args = parse_with_token("flag", &["1.2.3", "abc123", "core", "Core"]).unwrap();
        let config = Config::from(args);
        assert_eq!(config.token().unwrap(), "flag");
        assert_eq!(config.params.tag_name, "Core");
    }

    #[test]
    fn four_positionals_without_token_fail() {
        let config = Config::from(parse(&["1.2.3", "abc123", "core", "Core"]).unwrap());
        assert!(matches!(config.token(), Err(TaggerError::MissingToken)));
    }

    #[test]
    fn dry_run_resolves_without_token() {
        let config =
            Config::from(parse(&["--dry-run", "1.2.3", "abc123", "core", "Core"]).unwrap());
        assert!(config.dry_run);
        assert_eq!(config.params.tag_slug, "core");
        assert!(config.token().is_err());
    }

    #[test]
    fn too_few_arguments_fail_to_parse() {
        assert!(parse(&["t", "1.2.3", "abc123"]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn too_many_arguments_fail_to_parse() {
        assert!(parse(&["t", "1.2.3", "abc123", "core", "Core", "extra"]).is_err());
    }

    #[test]
    fn invalid_repository_fails_to_parse() {
        let err = Args::try_parse_from([
            "release-tagger",
            "--repository",
            "widgets",
            "t",
            "1.2.3",
            "abc123",
            "core",
            "Core",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn debug_output_hides_token() {
        let config = Config::from(parse(&["s3cret", "1.2.3", "abc123", "core", "Core"]).unwrap());
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn flags_are_parsed() {
        let args = parse(&[
            "--dry-run",
            "--beta-release",
            "--api-url",
            "http://localhost:9000",
            "t",
            "1.0.0-beta.1",
            "abc123",
            "core",
            "Core",
        ])
        .unwrap();
        let config = Config::from(args);
        assert!(config.dry_run);
        assert!(config.beta_release);
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:9000"));
    }
}
