//! GitHub Releases provider for setup-terragrunt.
//!
//! Resolves Terragrunt versions against the GitHub Releases API and fetches
//! the matching asset:
//! - [`GitHubReleaseIndex`] looks up `v<version>` releases
//! - [`resolve_asset`] picks the asset for a platform, applying the
//!   darwin/arm64 compatibility fallback for old releases
//! - [`HttpDownloader`] streams an asset to a temporary file

mod compat;
mod download;
mod release;
mod select;

pub use compat::{DARWIN_ARM64_MIN_VERSION, darwin_arm64_fallback};
pub use download::HttpDownloader;
pub use release::{DEFAULT_API_URL, DEFAULT_REPOSITORY, GitHubConfig, GitHubReleaseIndex};
pub use select::{resolve_asset, select_asset};

use setup_terragrunt_core::{Error, Result};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("setup-terragrunt/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by the release index and the downloader.
pub(crate) fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(client_error)
}

fn client_error(e: impl std::fmt::Display) -> Error {
    Error::configuration(format!("failed to build HTTP client: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_has_no_url() {
        let err = client_error("no TLS backend");
        assert!(matches!(err, Error::Configuration { .. }));
        assert_eq!(
            err.to_string(),
            "Configuration error: failed to build HTTP client: no TLS backend"
        );
    }

    #[test]
    fn test_build_client() {
        assert!(build_client().is_ok());
    }
}
