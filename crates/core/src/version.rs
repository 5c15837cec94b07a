//! Version normalization.

use crate::{Error, Result};

/// Normalize a requested version: trim it and strip a leading `v`.
///
/// # Errors
///
/// Returns a configuration error when nothing is left after normalization.
pub fn normalize_version(input: &str) -> Result<String> {
    let trimmed = input.trim();
    let version = trimmed.strip_prefix('v').unwrap_or(trimmed);
    if version.is_empty() {
        return Err(Error::configuration("a Terragrunt version is required"));
    }
    Ok(version.to_string())
}

/// Release tag for a normalized version.
#[must_use]
pub fn release_tag(version: &str) -> String {
    format!("v{version}")
}

/// Parse a release tag as semver, ignoring a leading `v`.
///
/// Returns `None` for tags that are not valid semver.
#[must_use]
pub fn parse_tag(tag: &str) -> Option<semver::Version> {
    let trimmed = tag.trim();
    semver::Version::parse(trimmed.strip_prefix('v').unwrap_or(trimmed)).ok()
}

/// Version directory name used by the tool cache.
///
/// Valid semver tags lose their `v` prefix; anything else is used verbatim.
#[must_use]
pub fn clean_version(tag: &str) -> String {
    parse_tag(tag).map_or_else(|| tag.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_marker() {
        assert_eq!(normalize_version("v0.57.13").unwrap(), "0.57.13");
        assert_eq!(normalize_version("0.57.13").unwrap(), "0.57.13");
        assert_eq!(normalize_version("  v0.57.13\n").unwrap(), "0.57.13");
    }

    #[test]
    fn test_normalize_strips_single_marker_only() {
        assert_eq!(normalize_version("vv1.0.0").unwrap(), "v1.0.0");
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(
            normalize_version(""),
            Err(Error::Configuration { .. })
        ));
        assert!(matches!(
            normalize_version("v"),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_release_tag() {
        assert_eq!(release_tag("0.57.13"), "v0.57.13");
    }

    #[test]
    fn test_parse_tag() {
        assert_eq!(
            parse_tag("v0.28.12"),
            Some(semver::Version::new(0, 28, 12))
        );
        assert_eq!(parse_tag("0.1.0"), Some(semver::Version::new(0, 1, 0)));
        assert!(parse_tag("latest").is_none());
        assert!(parse_tag("v1.2").is_none());
    }

    #[test]
    fn test_clean_version() {
        assert_eq!(clean_version("v0.57.13"), "0.57.13");
        assert_eq!(clean_version("nightly"), "nightly");
    }
}
