//! Provider traits for resolving and fetching release assets.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

use crate::Result;

/// A tagged release and its downloadable assets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    /// Tag name, `v`-prefixed (e.g. `v0.57.13`).
    pub tag_name: String,
    /// Assets in the order the index returned them.
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// A single downloadable file attached to a release.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Asset {
    /// File name, encoding platform and architecture
    /// (e.g. `terragrunt_linux_amd64`).
    pub name: String,
    /// Direct download URL.
    pub browser_download_url: String,
}

/// Remote index of releases.
#[async_trait]
pub trait ReleaseIndex: Send + Sync {
    /// Fetch the release published under `tag`.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseNotFound` when no release carries the tag and
    /// `Network` when the index cannot be reached.
    async fn release_by_tag(&self, tag: &str) -> Result<Release>;
}

/// Fetches a URL to local storage.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Download `url` and return the path of the local file.
    ///
    /// # Errors
    ///
    /// Returns `DownloadFailed` when the resource cannot be fetched or
    /// written.
    async fn download(&self, url: &str) -> Result<PathBuf>;
}
