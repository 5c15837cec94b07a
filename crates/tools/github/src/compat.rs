//! Platform compatibility exceptions for old Terragrunt releases.

use semver::Version;
use setup_terragrunt_core::Platform;
use setup_terragrunt_core::version::parse_tag;

/// First release that ships a darwin/arm64 build.
pub const DARWIN_ARM64_MIN_VERSION: Version = Version::new(0, 28, 12);

/// Substitute darwin/amd64 for darwin/arm64 on releases older than
/// [`DARWIN_ARM64_MIN_VERSION`].
///
/// macOS runs amd64 binaries on arm64 hardware through Rosetta. Returns
/// `None` when the rule does not apply, including tags that are not semver.
#[must_use]
pub fn darwin_arm64_fallback(tag: &str, platform: &Platform) -> Option<Platform> {
    if platform.os != "darwin" || platform.arch != "arm64" {
        return None;
    }
    let version = parse_tag(tag)?;
    (version < DARWIN_ARM64_MIN_VERSION).then(|| platform.with_arch("amd64"))
}
