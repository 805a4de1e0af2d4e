//! GitHub release API integration

mod release_client;
mod types;

pub use release_client::{DEFAULT_GITHUB_API_URL, GitHubReleaseClient};
pub use types::{Release, ReleaseAsset};
