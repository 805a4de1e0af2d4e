//! Aptly REST client.
//!
//! One client is built per run from the configured base URL and credentials
//! and passed by reference into every operation. Status codes are
//! interpreted only in `send`.

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use url::Url;

use crate::config::{AptlySettings, PublishCredentials};
use crate::error::{AptlyError, AptlyOperation, truncate_body};
use crate::http::{USER_AGENT_VALUE, endpoint};

type AptlyResult<T> = std::result::Result<T, AptlyError>;

#[derive(Serialize)]
struct CreateRepoRequest<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
}

/// Client for the Aptly management API
#[derive(Debug, Clone)]
pub struct AptlyClient {
    client: reqwest::Client,
    base_url: Url,
    credentials: PublishCredentials,
}

impl AptlyClient {
    /// Create a client for the configured server
    pub fn new(settings: &AptlySettings) -> AptlyResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        // Token mode sends the secret verbatim as the Authorization header
        if let PublishCredentials::Token { token } = &settings.credentials {
            let mut value =
                HeaderValue::from_str(token.expose()).map_err(|e| AptlyError::Client {
                    reason: format!("aptly token is not a valid header value: {}", e),
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AptlyError::Client {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: settings.url.clone(),
            credentials: settings.credentials.clone(),
        })
    }

    /// Create a local repo, treating "already exists" (HTTP 400) as success
    pub async fn ensure_repo_exists(&self, name: &str) -> AptlyResult<()> {
        log::info!("Creating repo {}", name);

        let request = self
            .request(Method::POST, AptlyOperation::CreateRepo, &["repos"])?
            .json(&CreateRepoRequest { name });

        match self.send(AptlyOperation::CreateRepo, request).await {
            Ok(body) => {
                log::debug!("{}", body);
                Ok(())
            }
            Err(e) if e.is_already_exists() => {
                log::debug!("Repo {} already exists: {}", name, e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Upload a file into an upload directory
    pub async fn upload_file(&self, dir: &str, content: Bytes, file_name: &str) -> AptlyResult<()> {
        log::info!("Uploading file {} to {}", file_name, dir);

        let length = content.len() as u64;
        let part = Part::stream_with_length(content, length).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let request = self
            .request(Method::POST, AptlyOperation::UploadFile, &["files", dir])?
            .multipart(form);

        let body = self.send(AptlyOperation::UploadFile, request).await?;
        log::debug!("{}", body);
        Ok(())
    }

    /// Add an uploaded file to a repo, replacing any conflicting package
    pub async fn register_file(&self, repo: &str, dir: &str, file_name: &str) -> AptlyResult<()> {
        log::info!("Adding file {}/{} to repo {}", dir, file_name, repo);

        let request = self
            .request(
                Method::POST,
                AptlyOperation::RegisterFile,
                &["repos", repo, "file", dir, file_name],
            )?
            .query(&[("forceReplace", "1")]);

        let body = self.send(AptlyOperation::RegisterFile, request).await?;
        log::debug!("{}", body);
        Ok(())
    }

    /// Regenerate the published index of a distribution
    pub async fn republish(&self, distribution: &str) -> AptlyResult<()> {
        log::info!("Updating published repo with distribution {}", distribution);

        let request = self
            .request(
                Method::PUT,
                AptlyOperation::Republish,
                &["publish", ":.", distribution],
            )?
            .json(&serde_json::json!({}));

        let body = self.send(AptlyOperation::Republish, request).await?;
        log::debug!("{}", body);
        Ok(())
    }

    fn request(
        &self,
        method: Method,
        operation: AptlyOperation,
        segments: &[&str],
    ) -> AptlyResult<RequestBuilder> {
        let url = endpoint(&self.base_url, segments).ok_or_else(|| AptlyError::Transport {
            operation,
            reason: format!("cannot build request URL from '{}'", self.base_url),
        })?;

        let builder = self.client.request(method, url);
        Ok(match &self.credentials {
            PublishCredentials::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose()))
            }
            PublishCredentials::Token { .. } => builder,
        })
    }

    async fn send(&self, operation: AptlyOperation, request: RequestBuilder) -> AptlyResult<String> {
        let response = request.send().await.map_err(|e| AptlyError::Transport {
            operation,
            reason: e.to_string(),
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| AptlyError::Transport {
            operation,
            reason: format!("failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            return Err(AptlyError::Status {
                operation,
                status,
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}
