//! Command line argument parsing.
//!
//! Every option falls back to the `INPUT_*` variable a GitHub Actions runner
//! exports for the action input of the same name, so the binary runs
//! unchanged as an action step.

use clap::Parser;

/// Publish GitHub release assets into an Aptly repository
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "kodegen_aptly_publish",
    version,
    about = "Publish GitHub release assets into an Aptly repository",
    long_about = "Download the assets of a GitHub release that match the given names or globs,
upload them to an Aptly server, add them to a repo and republish.

Usage:
  kodegen_aptly_publish --owner cyrup-ai --repo kodegen --release-tag v1.2.0 \\
      --assets '*.deb' --aptly-url https://aptly.example.com/api \\
      --aptly-repo kodegen --aptly-dir incoming --aptly-auth token \\
      --aptly-pass \"$APTLY_TOKEN\" --github-token \"$GITHUB_TOKEN\""
)]
pub struct Args {
    /// Owner of the source repository
    #[arg(long, env = "INPUT_OWNER")]
    pub owner: Option<String>,

    /// Name of the source repository
    #[arg(long, env = "INPUT_REPO")]
    pub repo: Option<String>,

    /// Tag of the release to publish assets from
    #[arg(long, env = "INPUT_RELEASE-TAG")]
    pub release_tag: Option<String>,

    /// Asset names or globs, separated by commas or newlines
    #[arg(long, env = "INPUT_ASSETS")]
    pub assets: Option<String>,

    /// Aptly API base URL (e.g. https://aptly.example.com/api)
    #[arg(long, env = "INPUT_APTLY-URL")]
    pub aptly_url: Option<String>,

    /// Aptly repo the files are added to
    #[arg(long, env = "INPUT_APTLY-REPO")]
    pub aptly_repo: Option<String>,

    /// Aptly upload directory
    #[arg(long, env = "INPUT_APTLY-DIR")]
    pub aptly_dir: Option<String>,

    /// Aptly auth mode: basic or token
    #[arg(long, env = "INPUT_APTLY-AUTH")]
    pub aptly_auth: Option<String>,

    /// Aptly username (basic auth only)
    #[arg(long, env = "INPUT_APTLY-USER")]
    pub aptly_user: Option<String>,

    /// Aptly password or token
    #[arg(long, env = "INPUT_APTLY-PASS", hide_env_values = true)]
    pub aptly_pass: Option<String>,

    /// GitHub API token
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    pub github_api_url: Option<String>,

    /// Repo created before any asset is processed [default: pkger]
    #[arg(long, env = "INPUT_STAGING-REPO")]
    pub staging_repo: Option<String>,

    /// Distribution republished after each file [default: jammy]
    #[arg(long, env = "INPUT_DISTRIBUTION")]
    pub distribution: Option<String>,

    /// Select assets without touching Aptly
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new() -> Self {
        Self {
            output: super::OutputManager::new(false),
        }
    }

    /// Runtime configuration that prints nothing but errors
    pub fn quiet() -> Self {
        Self {
            output: super::OutputManager::new(true),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeConfig {
    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print progress message
    pub fn progress_println(&self, message: &str) {
        let _ = self.output.progress(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print section header
    pub fn section(&self, title: &str) {
        let _ = self.output.section(title);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }
}
