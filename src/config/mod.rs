//! Run configuration: typed settings validated before any network call.

mod secret;
mod settings;

pub use secret::Secret;
pub use settings::{
    AptlySettings, AuthMode, DEFAULT_DISTRIBUTION, DEFAULT_STAGING_REPO, GitHubSettings,
    PublishCredentials, PublishSettings, RepositoryTarget, parse_asset_list,
};
