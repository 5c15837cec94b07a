//! Error types for setup-terragrunt.
//!
//! Every failure the installer can hit maps to one variant. Errors are
//! propagated unchanged to the binary entry point, which logs them once.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while provisioning Terragrunt.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// No release exists for the requested tag.
    #[error("Release {tag} not found")]
    #[diagnostic(
        code(setup_terragrunt::release_not_found),
        help("Check that the requested Terragrunt version has been published")
    )]
    ReleaseNotFound {
        /// The tag that was looked up (e.g. `v0.57.13`).
        tag: String,
    },

    /// The release has no build for the host platform and architecture.
    #[error("Terragrunt version {version} not available for {platform} and {arch}")]
    #[diagnostic(code(setup_terragrunt::asset_not_found))]
    AssetNotFound {
        /// Requested version, without the leading `v`.
        version: String,
        /// Mapped platform (e.g. `linux`).
        platform: String,
        /// Mapped architecture (e.g. `amd64`).
        arch: String,
    },

    /// The asset could not be downloaded.
    #[error("Unable to download Terragrunt from {url}: {message}")]
    #[diagnostic(code(setup_terragrunt::download_failed))]
    DownloadFailed {
        /// Asset download URL.
        url: String,
        /// What went wrong.
        message: String,
    },

    /// A filesystem operation failed.
    #[error("Unable to {operation}: {source}")]
    #[diagnostic(
        code(setup_terragrunt::filesystem),
        help("Check permissions on the tool cache and temporary directories")
    )]
    Filesystem {
        /// Human readable description including the paths involved.
        operation: String,
        /// Path the operation was acting on, when there is a single one.
        path: Option<PathBuf>,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The release index could not be reached or returned garbage.
    #[error("Request to {url} failed: {message}")]
    #[diagnostic(code(setup_terragrunt::network))]
    Network {
        /// Requested URL.
        url: String,
        /// Transport error or unexpected status.
        message: String,
    },

    /// Invalid input or configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(code(setup_terragrunt::configuration))]
    Configuration {
        /// What is wrong with the configuration.
        message: String,
    },
}

impl Error {
    /// Create a release-not-found error.
    #[must_use]
    pub fn release_not_found(tag: impl Into<String>) -> Self {
        Self::ReleaseNotFound { tag: tag.into() }
    }

    /// Create an asset-not-found error.
    #[must_use]
    pub fn asset_not_found(
        version: impl Into<String>,
        platform: impl Into<String>,
        arch: impl Into<String>,
    ) -> Self {
        Self::AssetNotFound {
            version: version.into(),
            platform: platform.into(),
            arch: arch.into(),
        }
    }

    /// Create a download failure.
    #[must_use]
    pub fn download_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DownloadFailed {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Wrap an I/O error with the operation that caused it.
    #[must_use]
    pub fn filesystem(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Filesystem {
            operation: operation.into(),
            path: None,
            source,
        }
    }

    /// Wrap an I/O error that concerns a single path.
    #[must_use]
    pub fn filesystem_at(
        operation: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        let path = path.into();
        Self::Filesystem {
            operation: format!("{} {}", operation.into(), path.display()),
            path: Some(path),
            source,
        }
    }

    /// Create a network error.
    #[must_use]
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
