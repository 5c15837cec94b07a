//! Asset selection.

use setup_terragrunt_core::tools::{Asset, Release};
use setup_terragrunt_core::{Error, Platform, Result};
use tracing::{debug, warn};

use crate::compat::{DARWIN_ARM64_MIN_VERSION, darwin_arm64_fallback};

/// Find the first asset whose name contains both the platform and the
/// architecture.
#[must_use]
pub fn select_asset<'a>(release: &'a Release, platform: &Platform) -> Option<&'a Asset> {
    release
        .assets
        .iter()
        .find(|asset| asset.name.contains(&platform.os) && asset.name.contains(&platform.arch))
}

/// Pick the asset to install for `platform`.
///
/// Applies the darwin/arm64 fallback before searching. Returns the asset
/// and the platform it was selected for.
///
/// # Errors
///
/// Returns `AssetNotFound` when no asset matches.
pub fn resolve_asset<'a>(
    release: &'a Release,
    version: &str,
    platform: &Platform,
) -> Result<(&'a Asset, Platform)> {
    let platform = match darwin_arm64_fallback(&release.tag_name, platform) {
        Some(fallback) => {
            warn!(
                "Terragrunt is not available for darwin/arm64 until version {}. Falling back to darwin/amd64.",
                DARWIN_ARM64_MIN_VERSION
            );
            fallback
        }
        None => platform.clone(),
    };

    debug!(tag = %release.tag_name, %platform, "Getting build for Terragrunt");
    select_asset(release, &platform)
        .map(|asset| (asset, platform.clone()))
        .ok_or_else(|| Error::asset_not_found(version, &platform.os, &platform.arch))
}
