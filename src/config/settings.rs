//! Settings for a single publish run.
//!
//! Built from command line arguments (or their `INPUT_*` environment
//! fallbacks) and validated up front, so configuration mistakes fail fast
//! before any request is sent.

use std::str::FromStr;

use url::Url;

use super::Secret;
use crate::cli::Args;
use crate::error::ConfigError;
use crate::github::DEFAULT_GITHUB_API_URL;

/// Repo created before any asset is processed
pub const DEFAULT_STAGING_REPO: &str = "pkger";

/// Distribution republished after every registered file
pub const DEFAULT_DISTRIBUTION: &str = "jammy";

/// How requests to Aptly are authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Username and password (HTTP basic auth)
    Basic,
    /// Raw `Authorization` header value
    Token,
}

impl FromStr for AuthMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "basic" => Ok(AuthMode::Basic),
            "token" => Ok(AuthMode::Token),
            other => Err(ConfigError::InvalidAuthMode {
                value: other.to_string(),
            }),
        }
    }
}

/// Credentials for the Aptly API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishCredentials {
    /// HTTP basic auth
    Basic {
        /// Username
        username: String,
        /// Password
        password: Secret,
    },
    /// Sent verbatim as the `Authorization` header
    Token {
        /// Header value
        token: Secret,
    },
}

impl PublishCredentials {
    /// Auth mode these credentials were built for
    pub fn mode(&self) -> AuthMode {
        match self {
            PublishCredentials::Basic { .. } => AuthMode::Basic,
            PublishCredentials::Token { .. } => AuthMode::Token,
        }
    }
}

/// Where matched assets end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTarget {
    /// Repo the uploaded files are added to
    pub repo: String,
    /// Upload directory on the Aptly server
    pub dir: String,
    /// Distribution republished after each file
    pub distribution: String,
    /// Repo created up front, before any asset is processed
    pub staging_repo: String,
}

/// Aptly connection settings
#[derive(Debug, Clone)]
pub struct AptlySettings {
    /// API base URL (usually ends in `/api`)
    pub url: Url,
    /// Credentials
    pub credentials: PublishCredentials,
}

/// GitHub connection settings
#[derive(Debug, Clone)]
pub struct GitHubSettings {
    /// API base URL
    pub api_url: Url,
    /// API token
    pub token: Secret,
}

/// Complete settings for one run
#[derive(Debug, Clone)]
pub struct PublishSettings {
    /// Source repository owner
    pub owner: String,
    /// Source repository name
    pub repo: String,
    /// Release tag to read assets from
    pub release_tag: String,
    /// Exact asset names or globs, in configured order
    pub selectors: Vec<String>,
    /// GitHub connection
    pub github: GitHubSettings,
    /// Aptly connection
    pub aptly: AptlySettings,
    /// Publish destination
    pub target: RepositoryTarget,
    /// Select assets only, skip all Aptly calls
    pub dry_run: bool,
}

impl PublishSettings {
    /// Validate command line arguments into settings
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let auth: AuthMode = args.aptly_auth.as_deref().unwrap_or_default().parse()?;

        let aptly_url = parse_url("aptly-url", &required("aptly-url", &args.aptly_url)?)?;
        let aptly_repo = required("aptly-repo", &args.aptly_repo)?;
        let aptly_dir = required("aptly-dir", &args.aptly_dir)?;
        let aptly_pass = Secret::new(required("aptly-pass", &args.aptly_pass)?);

        let credentials = match auth {
            AuthMode::Basic => PublishCredentials::Basic {
                username: required("aptly-user", &args.aptly_user)?,
                password: aptly_pass,
            },
            AuthMode::Token => PublishCredentials::Token { token: aptly_pass },
        };

        let github_token = Secret::new(required("github-token", &args.github_token)?);
        let github_api_url = parse_url(
            "github-api-url",
            &optional(&args.github_api_url).unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
        )?;

        let repo = required("repo", &args.repo)?;
        let owner = required("owner", &args.owner)?;
        let release_tag = required("release-tag", &args.release_tag)?;

        let selectors = parse_asset_list(&required("assets", &args.assets)?);
        if selectors.is_empty() {
            return Err(ConfigError::NoSelectors);
        }

        Ok(Self {
            owner,
            repo,
            release_tag,
            selectors,
            github: GitHubSettings {
                api_url: github_api_url,
                token: github_token,
            },
            aptly: AptlySettings {
                url: aptly_url,
                credentials,
            },
            target: RepositoryTarget {
                repo: aptly_repo,
                dir: aptly_dir,
                distribution: optional(&args.distribution)
                    .unwrap_or_else(|| DEFAULT_DISTRIBUTION.to_string()),
                staging_repo: optional(&args.staging_repo)
                    .unwrap_or_else(|| DEFAULT_STAGING_REPO.to_string()),
            },
            dry_run: args.dry_run,
        })
    }
}

/// Split the assets input into selectors.
///
/// Entries are separated by newlines (`\n` or `\r\n`) and commas; each entry
/// is trimmed and empty entries are dropped.
pub fn parse_asset_list(input: &str) -> Vec<String> {
    input
        .lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required(argument: &str, value: &Option<String>) -> Result<String, ConfigError> {
    optional(value).ok_or_else(|| ConfigError::MissingArgument {
        argument: argument.to_string(),
    })
}

fn parse_url(argument: &str, value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        argument: argument.to_string(),
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid("expected an http(s) URL".to_string()));
    }
    Ok(url)
}
