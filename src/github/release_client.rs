//! GitHub release lookup and asset download

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

use super::types::{Release, ReleaseAsset};
use crate::config::GitHubSettings;
use crate::error::{GitHubError, Result, truncate_body};
use crate::http::{USER_AGENT_VALUE, endpoint};

/// Public GitHub API root
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

const GITHUB_JSON: &str = "application/vnd.github+json";
const OCTET_STREAM: &str = "application/octet-stream";

/// Read-only client for release metadata and asset payloads
#[derive(Debug, Clone)]
pub struct GitHubReleaseClient {
    client: reqwest::Client,
    api_url: Url,
}

impl GitHubReleaseClient {
    /// Create a client authenticated with the configured token
    pub fn new(settings: &GitHubSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static("2022-11-28"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.token.expose()))
            .map_err(|e| GitHubError::Transport {
                operation: "github_client_init".to_string(),
                reason: format!("token is not a valid header value: {}", e),
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GitHubError::Transport {
                operation: "github_client_init".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_url: settings.api_url.clone(),
        })
    }

    /// Look up a release by tag.
    ///
    /// # Returns
    /// - `Ok(release)` - Release metadata with its assets
    /// - `Err(GitHubError::ReleaseNotFound)` - No release for the tag
    /// - `Err(_)` - Network or authentication error
    pub async fn get_release_by_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<Release> {
        let operation = "get_release_by_tag";
        let url = self.url(operation, &["repos", owner, repo, "releases", "tags", tag])?;
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await
            .map_err(|e| transport(operation, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GitHubError::ReleaseNotFound {
                owner: owner.to_string(),
                repo: repo.to_string(),
                tag: tag.to_string(),
            }
            .into());
        }
        let response = check_status(operation, response).await?;

        let release: Release = response
            .json()
            .await
            .map_err(|e| GitHubError::InvalidResponse {
                operation: operation.to_string(),
                reason: e.to_string(),
            })?;

        log::debug!(
            "Release {} ({}) has {} asset(s)",
            release.tag_name,
            release.id,
            release.assets.len()
        );
        Ok(release)
    }

    /// Download the raw content of a release asset.
    ///
    /// Fetches the asset's API `url`, falling back to the URL built from its
    /// id when the listing omitted it. A payload whose length differs from
    /// the advertised `size` is rejected.
    pub async fn download_asset(
        &self,
        owner: &str,
        repo: &str,
        asset: &ReleaseAsset,
    ) -> Result<Bytes> {
        let operation = "download_release_asset";
        let url = if asset.url.is_empty() {
            let asset_id = asset.id.to_string();
            self.url(
                operation,
                &["repos", owner, repo, "releases", "assets", asset_id.as_str()],
            )?
        } else {
            Url::parse(&asset.url).map_err(|e| GitHubError::InvalidResponse {
                operation: operation.to_string(),
                reason: format!("asset {} has an invalid url '{}': {}", asset.name, asset.url, e),
            })?
        };
        log::debug!("GET {} ({})", url, asset.name);

        // GitHub redirects to storage; reqwest drops the Authorization header on the cross-host hop
        let response = self
            .client
            .get(url)
            .header(ACCEPT, OCTET_STREAM)
            .send()
            .await
            .map_err(|e| transport(operation, e))?;
        let response = check_status(operation, response).await?;

        let content = response.bytes().await.map_err(|e| transport(operation, e))?;
        log::debug!("Downloaded {} ({} bytes)", asset.name, content.len());

        if asset.size != 0 && content.len() as u64 != asset.size {
            return Err(GitHubError::InvalidResponse {
                operation: operation.to_string(),
                reason: format!(
                    "asset {} is {} bytes but {} were downloaded",
                    asset.name,
                    asset.size,
                    content.len()
                ),
            }
            .into());
        }

        Ok(content)
    }

    fn url(&self, operation: &str, segments: &[&str]) -> Result<Url> {
        endpoint(&self.api_url, segments).ok_or_else(|| {
            GitHubError::Transport {
                operation: operation.to_string(),
                reason: format!("cannot build request URL from '{}'", self.api_url),
            }
            .into()
        })
    }
}

fn transport(operation: &str, e: reqwest::Error) -> GitHubError {
    GitHubError::Transport {
        operation: operation.to_string(),
        reason: e.to_string(),
    }
}

async fn check_status(operation: &str, response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(GitHubError::Status {
        operation: operation.to_string(),
        status,
        body: truncate_body(&body),
    }
    .into())
}
