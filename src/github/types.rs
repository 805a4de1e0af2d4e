//! Release metadata returned by the GitHub API

use serde::Deserialize;

/// A tagged GitHub release and its assets
#[derive(Deserialize, Clone, Debug)]
pub struct Release {
    /// Release ID
    pub id: u64,
    /// Tag the release was created from
    pub tag_name: String,
    /// Attached binary assets, in API order
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// A binary file attached to a release
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReleaseAsset {
    /// Asset ID, used to download the content
    pub id: u64,
    /// File name
    pub name: String,
    /// Size in bytes, or 0 when unknown
    #[serde(default)]
    pub size: u64,
    /// API URL of the asset (serves the payload with `Accept: application/octet-stream`).
    /// Empty when the listing omitted it.
    #[serde(default)]
    pub url: String,
}
