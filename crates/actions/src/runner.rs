//! File commands understood by the Actions runner.
//!
//! The runner exposes one file per command through environment variables.
//! Appending to them changes the environment of the *following* steps:
//! - `GITHUB_PATH`: one directory per line, prepended to `PATH`
//! - `GITHUB_ENV`: `NAME<<DELIMITER` blocks, exported as variables
//! - `GITHUB_OUTPUT`: same format, exposed as step outputs

use setup_terragrunt_core::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// Handle on the runner's file commands.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    path_file: Option<PathBuf>,
    env_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl Runner {
    /// Build a runner from `GITHUB_PATH`, `GITHUB_ENV` and `GITHUB_OUTPUT`.
    #[must_use]
    pub fn from_env() -> Self {
        let file = |name: &str| {
            std::env::var_os(name)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self {
            path_file: file("GITHUB_PATH"),
            env_file: file("GITHUB_ENV"),
            output_file: file("GITHUB_OUTPUT"),
        }
    }

    /// Set the file `add_path` appends to.
    #[must_use]
    pub fn with_path_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.path_file = Some(path.into());
        self
    }

    /// Set the file `export_variable` appends to.
    #[must_use]
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Set the file `set_output` appends to.
    #[must_use]
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Publish `dir` on the `PATH` of later steps.
    pub fn add_path(&self, dir: &Path) -> Result<()> {
        let Some(file) = &self.path_file else {
            info!(path = %dir.display(), "GITHUB_PATH is not set; add this directory to PATH manually");
            return Ok(());
        };
        debug!(path = %dir.display(), "Adding to PATH");
        append(file, &format!("{}\n", dir.display()))
    }

    /// Export an environment variable to later steps.
    pub fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        let Some(file) = &self.env_file else {
            info!(name, value, "GITHUB_ENV is not set; variable not exported");
            return Ok(());
        };
        debug!(name, value, "Exporting variable");
        append(file, &key_value_message(name, value)?)
    }

    /// Set an output of the current step.
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let Some(file) = &self.output_file else {
            debug!(name, "GITHUB_OUTPUT is not set; output dropped");
            return Ok(());
        };
        append(file, &key_value_message(name, value)?)
    }
}

/// Whether the process runs inside a GitHub Actions job.
#[must_use]
pub fn is_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

fn key_value_message(name: &str, value: &str) -> Result<String> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(Error::configuration(format!(
            "value for {name} contains the file command delimiter"
        )));
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn append(file: &Path, contents: &str) -> Result<()> {
    let mut handle = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .map_err(|e| Error::filesystem_at("open", file, e))?;
    handle
        .write_all(contents.as_bytes())
        .map_err(|e| Error::filesystem_at("write to", file, e))
}
