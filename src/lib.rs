//! # kodegen_aptly_publish
//!
//! Publish the assets of a GitHub release into an Aptly package repository.
//!
//! A run fetches the release by tag, selects assets by exact name or glob,
//! makes sure the staging repo exists, then for every selected asset
//! downloads it, uploads it to the Aptly upload directory, adds it to the
//! target repo (force-replace) and republishes the distribution. The first
//! failure aborts the run.
//!
//! ## Usage
//!
//! ```bash
//! kodegen_aptly_publish --owner cyrup-ai --repo kodegen --release-tag v1.2.0 \
//!     --assets '*.deb' --aptly-url https://aptly.example.com/api \
//!     --aptly-repo kodegen --aptly-dir incoming \
//!     --aptly-auth basic --aptly-user deploy --aptly-pass "$APTLY_PASS" \
//!     --github-token "$GITHUB_TOKEN"
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod aptly;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod http;
pub mod matcher;
pub mod pipeline;
pub mod selector;

// Re-export main types for public API
pub use aptly::AptlyClient;
pub use cli::{Args, RuntimeConfig};
pub use config::{AuthMode, PublishCredentials, PublishSettings, RepositoryTarget, Secret};
pub use error::{AptlyError, ConfigError, GitHubError, ReleaseError, Result};
pub use github::{GitHubReleaseClient, Release, ReleaseAsset};
pub use matcher::matches;
pub use pipeline::{PublishPipeline, PublishReport};
pub use selector::{MatchedAsset, select_assets};
