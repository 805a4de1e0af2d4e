//! Error types for aptly publishing operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for kodegen_aptly_publish operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all kodegen_aptly_publish operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Configuration errors (raised before any network call)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// GitHub release API errors
    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    /// Aptly API errors
    #[error("Aptly error: {0}")]
    Aptly(#[from] AptlyError),

    /// IO errors while staging asset payloads
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Auth mode is neither `basic` nor `token`
    #[error("Invalid aptly-auth value '{value}'. Expected 'basic' or 'token'.")]
    InvalidAuthMode {
        /// Value supplied by the user
        value: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },

    /// URL could not be parsed or is not http(s)
    #[error("Invalid URL for {argument} '{value}': {reason}")]
    InvalidUrl {
        /// Argument name
        argument: String,
        /// Value supplied by the user
        value: String,
        /// Reason for the error
        reason: String,
    },

    /// The assets input produced no selectors
    #[error("No asset selectors given. Provide names or globs separated by commas or newlines.")]
    NoSelectors,
}

/// GitHub release API errors
#[derive(Error, Debug)]
pub enum GitHubError {
    /// No release exists for the tag
    #[error("Release '{tag}' not found in {owner}/{repo}")]
    ReleaseNotFound {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
        /// Release tag
        tag: String,
    },

    /// Non-success HTTP status
    #[error("{operation} failed with HTTP {status}: {body}")]
    Status {
        /// Operation that failed
        operation: String,
        /// Response status
        status: StatusCode,
        /// Response body (truncated)
        body: String,
    },

    /// Network or client failure
    #[error("{operation} failed: {reason}")]
    Transport {
        /// Operation that failed
        operation: String,
        /// Reason for the error
        reason: String,
    },

    /// Response could not be decoded
    #[error("Invalid response from {operation}: {reason}")]
    InvalidResponse {
        /// Operation that failed
        operation: String,
        /// Reason for the error
        reason: String,
    },
}

/// Aptly API errors
#[derive(Error, Debug)]
pub enum AptlyError {
    /// Non-success HTTP status
    #[error("{operation} failed with HTTP {status}: {body}")]
    Status {
        /// Operation that failed
        operation: AptlyOperation,
        /// Response status
        status: StatusCode,
        /// Response body (truncated)
        body: String,
    },

    /// Network failure
    #[error("{operation} failed: {reason}")]
    Transport {
        /// Operation that failed
        operation: AptlyOperation,
        /// Reason for the error
        reason: String,
    },

    /// HTTP client could not be built
    #[error("Failed to create HTTP client: {reason}")]
    Client {
        /// Reason for the error
        reason: String,
    },
}

/// The four remote operations performed against Aptly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AptlyOperation {
    /// `POST /repos`
    CreateRepo,
    /// `POST /files/{dir}`
    UploadFile,
    /// `POST /repos/{repo}/file/{dir}/{file}`
    RegisterFile,
    /// `PUT /publish/:./{distribution}`
    Republish,
}

impl std::fmt::Display for AptlyOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AptlyOperation::CreateRepo => "create repo",
            AptlyOperation::UploadFile => "upload file",
            AptlyOperation::RegisterFile => "add file to repo",
            AptlyOperation::Republish => "update published repo",
        };
        f.write_str(name)
    }
}

impl AptlyError {
    /// HTTP status of the failed call, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AptlyError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Aptly answers repo creation with 400 when the repo already exists
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            AptlyError::Status {
                operation: AptlyOperation::CreateRepo,
                status,
                ..
            } if *status == StatusCode::BAD_REQUEST
        )
    }
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Config(ConfigError::InvalidAuthMode { .. }) => vec![
                "Set --aptly-auth (INPUT_APTLY-AUTH) to 'basic' or 'token'".to_string(),
            ],
            ReleaseError::Config(ConfigError::MissingArgument { argument }) => vec![format!(
                "Pass --{} or set INPUT_{}",
                argument,
                argument.to_uppercase()
            )],
            ReleaseError::GitHub(GitHubError::ReleaseNotFound { owner, repo, tag }) => vec![
                format!("Check that tag '{}' has a published release in {}/{}", tag, owner, repo),
                "Draft releases are only visible to tokens with push access".to_string(),
            ],
            ReleaseError::GitHub(GitHubError::Status { status, .. })
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN =>
            {
                vec![
                    "Verify the GitHub token is valid and can read the repository".to_string(),
                ]
            }
            ReleaseError::Aptly(AptlyError::Status { status, .. })
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN =>
            {
                vec![
                    "Verify --aptly-auth matches the server's auth scheme".to_string(),
                    "Verify --aptly-user / --aptly-pass".to_string(),
                ]
            }
            ReleaseError::Aptly(AptlyError::Transport { .. }) => vec![
                "Check that --aptly-url points at the Aptly API root (usually ending in /api)"
                    .to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }

    /// Check if this error was raised before any network call
    pub fn is_config(&self) -> bool {
        matches!(self, ReleaseError::Config(_))
    }
}

/// Truncate a response body for inclusion in an error message
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX_BODY: usize = 512;
    let body = body.trim();
    if body.len() <= MAX_BODY {
        return body.to_string();
    }
    let mut end = MAX_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}
