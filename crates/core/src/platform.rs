//! Platform detection and mapping.
//!
//! Terragrunt release assets are named with Go's `GOOS`/`GOARCH` vocabulary
//! (e.g. `terragrunt_darwin_arm64`, `terragrunt_windows_386.exe`). Host
//! identifiers come either from Rust (`std::env::consts`) or from runner
//! metadata using Node's vocabulary (`win32`, `x64`), so both are mapped here.
//!
//! Values missing from the tables pass through unchanged; an unknown platform
//! simply fails asset selection later.

use std::fmt;

/// Platform names that differ from the release vocabulary.
const OS_MAPPINGS: &[(&str, &str)] = &[("win32", "windows"), ("macos", "darwin")];

/// Architecture names that differ from the release vocabulary.
const ARCH_MAPPINGS: &[(&str, &str)] = &[
    ("x32", "386"),
    ("ia32", "386"),
    ("x86", "386"),
    ("x64", "amd64"),
    ("x86_64", "amd64"),
    ("aarch64", "arm64"),
];

/// A (platform, architecture) pair in release-asset vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    /// Operating system (`darwin`, `linux`, `windows`).
    pub os: String,
    /// Architecture (`386`, `amd64`, `arm`, `arm64`).
    pub arch: String,
}

impl Platform {
    /// Create a platform from already-mapped names.
    #[must_use]
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Map raw host identifiers into release vocabulary.
    #[must_use]
    pub fn from_host(os: &str, arch: &str) -> Self {
        Self::new(map_os(os), map_arch(arch))
    }

    /// Get the platform of the running host.
    #[must_use]
    pub fn current() -> Self {
        Self::from_host(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Whether this platform uses `.exe` executables.
    #[must_use]
    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }

    /// File name of an executable on this platform, `name.exe` on Windows.
    #[must_use]
    pub fn executable_name(&self, name: &str) -> String {
        if self.is_windows() {
            format!("{name}.exe")
        } else {
            name.to_string()
        }
    }

    /// Return the same platform with another architecture.
    #[must_use]
    pub fn with_arch(&self, arch: impl Into<String>) -> Self {
        Self::new(self.os.clone(), arch)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Map a host OS identifier to the release vocabulary.
#[must_use]
pub fn map_os(os: &str) -> String {
    lookup(OS_MAPPINGS, os)
}

/// Map a host CPU architecture identifier to the release vocabulary.
#[must_use]
pub fn map_arch(arch: &str) -> String {
    lookup(ARCH_MAPPINGS, arch)
}

fn lookup(table: &[(&str, &str)], value: &str) -> String {
    table
        .iter()
        .find(|(from, _)| *from == value)
        .map_or(value, |&(_, to)| to)
        .to_string()
}
