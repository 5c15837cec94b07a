//! Install a pinned Terragrunt release on a CI runner.
//!
//! The [`Installer`] resolves the requested release, downloads the asset for
//! the host, optionally swaps in the output-capturing wrapper, caches the
//! result and publishes it on the `PATH` of later workflow steps.

pub mod cli;
pub mod setup;
pub mod tracing;
pub mod wrapper;

use setup_terragrunt_actions::Runner;
use setup_terragrunt_core::{Error, Platform, Result, ToolCache};
use setup_terragrunt_tools_github::{GitHubConfig, GitHubReleaseIndex, HttpDownloader};
use std::path::PathBuf;
use std::sync::Arc;

pub use cli::Cli;
pub use setup::{Installation, Installer, SetupOptions};

/// Name of the wrapper executable shipped next to the installer.
pub const WRAPPER_BINARY_NAME: &str = "terragrunt-wrapper";

/// Run the installer with the given arguments against GitHub.
pub async fn run(cli: &Cli) -> Result<Installation> {
    let version = cli
        .terragrunt_version
        .as_deref()
        .ok_or_else(|| Error::configuration("terragrunt_version is required"))?;
    let platform = Platform::current();

    let mut options = SetupOptions::new(version).with_platform(platform.clone());
    if cli.terragrunt_wrapper {
        let wrapper_bin = match &cli.wrapper_bin {
            Some(path) => path.clone(),
            None => default_wrapper_bin(&platform)?,
        };
        options = options.with_wrapper(wrapper_bin);
    }

    let index = GitHubReleaseIndex::new(
        GitHubConfig::default()
            .with_api_url(&cli.api_url)
            .with_repository(&cli.repository)
            .with_token(cli.github_token.clone()),
    )?;
    let temp_dir = cli.temp_dir.clone().unwrap_or_else(std::env::temp_dir);
    let downloader = HttpDownloader::new(temp_dir)?;
    let cache = cli
        .tool_cache
        .clone()
        .map_or_else(ToolCache::default, ToolCache::new);

    let installer = Installer::new(
        Arc::new(index),
        Arc::new(downloader),
        cache,
        Runner::from_env(),
    );
    installer.install(&options).await
}

/// The wrapper executable next to the running installer.
fn default_wrapper_bin(platform: &Platform) -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| Error::filesystem("locate the running executable", e))?;
    let dir = exe.parent().map(PathBuf::from).unwrap_or_default();
    Ok(dir.join(platform.executable_name(WRAPPER_BINARY_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wrapper_bin_is_sibling() {
        let exe = std::env::current_exe().unwrap();
        let path = default_wrapper_bin(&Platform::new("linux", "amd64")).unwrap();
        assert_eq!(path.parent(), exe.parent());
        assert_eq!(path.file_name().unwrap(), "terragrunt-wrapper");

        let path = default_wrapper_bin(&Platform::new("windows", "amd64")).unwrap();
        assert_eq!(path.file_name().unwrap(), "terragrunt-wrapper.exe");
    }
}
