//! Core types for setup-terragrunt.
//!
//! This crate holds the pieces shared by the installer and the wrapper:
//!
//! - [`Error`] and [`Result`] - the error taxonomy of the install pipeline
//! - [`platform`] - mapping host identifiers to release-asset vocabulary
//! - [`version`] - version normalization and tag parsing
//! - [`cache`] - the tag-addressed tool cache
//! - [`tools`] - traits for the release index and the downloader

pub mod cache;
mod error;
pub mod platform;
pub mod tools;
pub mod version;

pub use cache::ToolCache;
pub use error::{Error, Result};
pub use platform::Platform;

/// Name of the tool being provisioned.
pub const TOOL_NAME: &str = "terragrunt";

/// Name the real binary is moved to when the wrapper is installed.
pub const WRAPPED_BINARY_NAME: &str = "terragrunt-bin";

/// Variable naming the directory that holds the real binary.
pub const CLI_PATH_VAR: &str = "TERRAGRUNT_CLI_PATH";

/// Variable naming the real binary itself.
pub const CLI_BIN_VAR: &str = "TERRAGRUNT_CLI_BIN";
