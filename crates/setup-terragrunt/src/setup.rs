//! The install pipeline.
//!
//! Resolve the release, pick the asset for the host, download it, stage it
//! as `terragrunt[.exe]`, optionally install the wrapper, copy the result
//! into the tool cache and publish the cache entry on `PATH`.

use setup_terragrunt_actions::Runner;
use setup_terragrunt_core::tools::{Downloader, Release, ReleaseIndex};
use setup_terragrunt_core::version::{normalize_version, release_tag};
use setup_terragrunt_core::{Error, Platform, Result, TOOL_NAME, ToolCache};
use setup_terragrunt_tools_github::resolve_asset;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::wrapper::{BinaryNames, export_cli_location, install_wrapper};

/// What to install.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Requested version, optionally `v`-prefixed.
    pub version: String,
    /// Host platform in release vocabulary.
    pub platform: Platform,
    /// Wrapper executable to install, `None` to leave the binary alone.
    pub wrapper_bin: Option<PathBuf>,
}

impl SetupOptions {
    /// Install `version` for the running host without the wrapper.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            platform: Platform::current(),
            wrapper_bin: None,
        }
    }

    /// Install for another platform.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Install the wrapper found at `wrapper_bin`.
    #[must_use]
    pub fn with_wrapper(mut self, wrapper_bin: PathBuf) -> Self {
        self.wrapper_bin = Some(wrapper_bin);
        self
    }
}

/// Outcome of a successful install.
#[derive(Debug, Clone)]
pub struct Installation {
    /// The release that was installed.
    pub release: Release,
    /// Platform the asset was selected for.
    pub platform: Platform,
    /// Name of the downloaded asset.
    pub asset: String,
    /// Cache entry published on `PATH`.
    pub path: PathBuf,
    /// Whether the wrapper was installed.
    pub wrapped: bool,
}

/// Runs the install pipeline against a release index and a downloader.
pub struct Installer {
    index: Arc<dyn ReleaseIndex>,
    downloader: Arc<dyn Downloader>,
    cache: ToolCache,
    runner: Runner,
}

impl Installer {
    /// Create an installer.
    #[must_use]
    pub fn new(
        index: Arc<dyn ReleaseIndex>,
        downloader: Arc<dyn Downloader>,
        cache: ToolCache,
        runner: Runner,
    ) -> Self {
        Self {
            index,
            downloader,
            cache,
            runner,
        }
    }

    /// Install Terragrunt as described by `options`.
    pub async fn install(&self, options: &SetupOptions) -> Result<Installation> {
        let version = normalize_version(&options.version)?;
        debug!(%version, "Finding releases for Terragrunt version");
        let release = self.index.release_by_tag(&release_tag(&version)).await?;

        let (asset, platform) = resolve_asset(&release, &version, &options.platform)?;
        let downloaded =
            download_cli(self.downloader.as_ref(), &asset.browser_download_url).await?;

        let names = BinaryNames::for_platform(&platform);
        let staging = stage_binary(&downloaded, &names)?;

        if let Some(wrapper_bin) = &options.wrapper_bin {
            install_wrapper(&staging, wrapper_bin, &names, &self.runner)?;
        }

        let cached = self
            .cache
            .cache_dir(&staging, TOOL_NAME, &release.tag_name, &platform.arch)?;

        if options.wrapper_bin.is_some() {
            export_cli_location(&self.runner, &cached, &names)?;
        }
        self.runner.add_path(&cached)?;

        Ok(Installation {
            asset: asset.name.clone(),
            release: release.clone(),
            platform,
            path: cached,
            wrapped: options.wrapper_bin.is_some(),
        })
    }
}

/// Download `url`, rejecting an empty result path.
async fn download_cli(downloader: &dyn Downloader, url: &str) -> Result<PathBuf> {
    debug!(%url, "Downloading Terragrunt CLI");
    let path = downloader.download(url).await?;
    debug!(path = %path.display(), "Terragrunt CLI downloaded");

    if path.as_os_str().is_empty() {
        return Err(Error::download_failed(url, "download returned an empty path"));
    }
    Ok(path)
}

/// Move the downloaded file into its own directory as `terragrunt[.exe]`.
fn stage_binary(downloaded: &Path, names: &BinaryNames) -> Result<PathBuf> {
    let mut dir_name = downloaded
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    dir_name.push("-staging");
    let staging = downloaded.with_file_name(dir_name);

    std::fs::create_dir_all(&staging).map_err(|e| Error::filesystem_at("create", &staging, e))?;

    let binary = staging.join(&names.tool);
    std::fs::rename(downloaded, &binary).map_err(|e| {
        Error::filesystem(
            format!("move {} to {}", downloaded.display(), binary.display()),
            e,
        )
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&binary)
            .map_err(|e| Error::filesystem_at("read metadata of", &binary, e))?
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&binary, perms)
            .map_err(|e| Error::filesystem_at("set permissions on", &binary, e))?;
    }

    debug!(path = %staging.display(), "Staged Terragrunt CLI");
    Ok(staging)
}
