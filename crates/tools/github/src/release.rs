//! Release lookups against the GitHub Releases API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use setup_terragrunt_core::tools::{Release, ReleaseIndex};
use setup_terragrunt_core::{Error, Result};
use tracing::debug;

use crate::build_client;

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Repository Terragrunt is released from.
pub const DEFAULT_REPOSITORY: &str = "gruntwork-io/terragrunt";

/// Connection settings for the release index.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// API base URL, without a trailing slash.
    pub api_url: String,
    /// Repository as `owner/name`.
    pub repository: String,
    /// Token forwarded as a bearer credential, if one is available.
    pub token: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            token: None,
        }
    }
}

impl GitHubConfig {
    /// Set the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the repository.
    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    /// Set the token. Empty tokens are ignored.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    fn release_url(&self, tag: &str) -> String {
        format!(
            "{}/repos/{}/releases/tags/{}",
            self.api_url.trim_end_matches('/'),
            self.repository,
            tag
        )
    }
}

/// Release index backed by the GitHub Releases API.
pub struct GitHubReleaseIndex {
    client: Client,
    config: GitHubConfig,
}

impl GitHubReleaseIndex {
    /// Create a release index with the given settings.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be initialized.
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let client = build_client()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ReleaseIndex for GitHubReleaseIndex {
    async fn release_by_tag(&self, tag: &str) -> Result<Release> {
        let url = self.config.release_url(tag);
        debug!(%url, %tag, "Fetching GitHub release");

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::network(&url, e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::release_not_found(tag));
        }
        if !status.is_success() {
            return Err(Error::network(&url, format!("HTTP {status}")));
        }

        let release: Release = response
            .json()
            .await
            .map_err(|e| Error::network(&url, format!("invalid release metadata: {e}")))?;

        debug!(tag = %release.tag_name, assets = release.assets.len(), "Fetched GitHub release");
        Ok(release)
    }
}
