//! Tag-addressed tool cache.
//!
//! Mirrors the layout of the GitHub Actions runner tool cache so entries
//! written here are shared with other setup actions on the same runner:
//!
//! ```text
//! $RUNNER_TOOL_CACHE/
//! └── terragrunt/
//!     └── 0.57.13/
//!         ├── amd64/
//!         │   ├── terragrunt
//!         │   └── terragrunt-bin   # only when the wrapper is installed
//!         └── amd64.complete
//! ```

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::version::clean_version;
use crate::{Error, Result};

/// Directory cache keyed by (tool, version tag, architecture).
#[derive(Debug, Clone)]
pub struct ToolCache {
    root: PathBuf,
}

impl Default for ToolCache {
    fn default() -> Self {
        Self::new(default_cache_dir())
    }
}

impl ToolCache {
    /// Create a cache rooted at the given directory.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the cache root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the entry for a tool version.
    #[must_use]
    pub fn entry_dir(&self, tool: &str, tag: &str, arch: &str) -> PathBuf {
        self.root.join(tool).join(clean_version(tag)).join(arch)
    }

    /// Marker written once an entry is fully populated.
    #[must_use]
    pub fn marker_path(&self, tool: &str, tag: &str, arch: &str) -> PathBuf {
        self.root
            .join(tool)
            .join(clean_version(tag))
            .join(format!("{arch}.complete"))
    }

    /// Copy the contents of `source` into the entry for (tool, tag, arch).
    ///
    /// Any previous entry is replaced. Returns the entry directory.
    pub fn cache_dir(&self, source: &Path, tool: &str, tag: &str, arch: &str) -> Result<PathBuf> {
        let dest = self.entry_dir(tool, tag, arch);
        let marker = self.marker_path(tool, tag, arch);

        if marker.exists() {
            std::fs::remove_file(&marker)
                .map_err(|e| Error::filesystem_at("remove cache marker", &marker, e))?;
        }
        if dest.exists() {
            std::fs::remove_dir_all(&dest)
                .map_err(|e| Error::filesystem_at("clear cache entry", &dest, e))?;
        }

        copy_dir(source, &dest)?;
        std::fs::write(&marker, b"")
            .map_err(|e| Error::filesystem_at("write cache marker", &marker, e))?;

        debug!(tool, tag, arch, ?dest, "Stored tool in cache");
        Ok(dest)
    }
}

/// Get the default cache directory, used when the runner provides none.
#[must_use]
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("setup-terragrunt")
        .join("tools")
}

fn copy_dir(source: &Path, dest: &Path) -> Result<()> {
    std::fs::create_dir_all(dest).map_err(|e| Error::filesystem_at("create", dest, e))?;

    let entries =
        std::fs::read_dir(source).map_err(|e| Error::filesystem_at("read directory", source, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::filesystem_at("read directory", source, e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if from.is_dir() {
            copy_dir(&from, &to)?;
        } else {
            std::fs::copy(&from, &to).map_err(|e| {
                Error::filesystem(
                    format!("copy {} to {}", from.display(), to.display()),
                    e,
                )
            })?;
        }
    }
    Ok(())
}
