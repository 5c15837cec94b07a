//! Installation of the output-capturing wrapper.
//!
//! The real binary is renamed to `terragrunt-bin[.exe]` and the wrapper takes
//! over `terragrunt[.exe]`. Later steps invoking `terragrunt` run the wrapper,
//! which finds the real binary through the exported variables.

use setup_terragrunt_actions::Runner;
use setup_terragrunt_core::{
    CLI_BIN_VAR, CLI_PATH_VAR, Error, Platform, Result, TOOL_NAME, WRAPPED_BINARY_NAME,
};
use std::path::Path;
use tracing::debug;

/// File names of the tool and of the renamed real binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNames {
    /// Name later steps invoke, `terragrunt[.exe]`.
    pub tool: String,
    /// Name the real binary is moved to, `terragrunt-bin[.exe]`.
    pub wrapped: String,
}

impl BinaryNames {
    /// Names for executables on `platform`.
    #[must_use]
    pub fn for_platform(platform: &Platform) -> Self {
        Self {
            tool: platform.executable_name(TOOL_NAME),
            wrapped: platform.executable_name(WRAPPED_BINARY_NAME),
        }
    }
}

/// Swap the binary in `dir` for the wrapper at `wrapper_bin`.
///
/// Nothing is rolled back on failure: if the copy fails after the rename,
/// `dir` is left without a `terragrunt` entry.
pub fn install_wrapper(
    dir: &Path,
    wrapper_bin: &Path,
    names: &BinaryNames,
    runner: &Runner,
) -> Result<()> {
    let tool = dir.join(&names.tool);
    let wrapped = dir.join(&names.wrapped);

    debug!(source = %tool.display(), target = %wrapped.display(), "Moving real binary");
    std::fs::rename(&tool, &wrapped).map_err(|e| {
        Error::filesystem(
            format!("move {} to {}", tool.display(), wrapped.display()),
            e,
        )
    })?;

    debug!(source = %wrapper_bin.display(), target = %tool.display(), "Installing wrapper");
    std::fs::copy(wrapper_bin, &tool).map_err(|e| {
        Error::filesystem(
            format!("copy {} to {}", wrapper_bin.display(), tool.display()),
            e,
        )
    })?;

    export_cli_location(runner, dir, names)
}

/// Export the variables the wrapper uses to find the real binary in `dir`.
pub fn export_cli_location(runner: &Runner, dir: &Path, names: &BinaryNames) -> Result<()> {
    runner.export_variable(CLI_PATH_VAR, &dir.display().to_string())?;
    runner.export_variable(CLI_BIN_VAR, &dir.join(&names.wrapped).display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn staging(temp: &TempDir, names: &BinaryNames) -> std::path::PathBuf {
        let dir = temp.path().join("staging");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(&names.tool), b"real terragrunt").unwrap();
        dir
    }

    fn wrapper_artifact(temp: &TempDir) -> std::path::PathBuf {
        let path = temp.path().join("terragrunt-wrapper");
        std::fs::write(&path, b"wrapper artifact").unwrap();
        path
    }

    #[test]
    fn test_names_for_platform() {
        let names = BinaryNames::for_platform(&Platform::new("linux", "amd64"));
        assert_eq!(names.tool, "terragrunt");
        assert_eq!(names.wrapped, "terragrunt-bin");

        let names = BinaryNames::for_platform(&Platform::new("windows", "386"));
        assert_eq!(names.tool, "terragrunt.exe");
        assert_eq!(names.wrapped, "terragrunt-bin.exe");
    }

    #[test]
    fn test_install_wrapper_swaps_binaries() {
        let temp = TempDir::new().unwrap();
        let names = BinaryNames::for_platform(&Platform::new("linux", "amd64"));
        let dir = staging(&temp, &names);
        let wrapper = wrapper_artifact(&temp);
        let env_file = temp.path().join("env");
        let runner = Runner::default().with_env_file(&env_file);

        install_wrapper(&dir, &wrapper, &names, &runner).unwrap();

        assert_eq!(std::fs::read(dir.join("terragrunt")).unwrap(), b"wrapper artifact");
        assert_eq!(std::fs::read(dir.join("terragrunt-bin")).unwrap(), b"real terragrunt");

        let env = std::fs::read_to_string(env_file).unwrap();
        assert!(env.contains("TERRAGRUNT_CLI_PATH<<"));
        assert!(env.contains(&format!("\n{}\n", dir.display())));
        assert!(env.contains("TERRAGRUNT_CLI_BIN<<"));
        assert!(env.contains(&format!("\n{}\n", dir.join("terragrunt-bin").display())));
    }

    #[test]
    fn test_install_wrapper_on_windows_keeps_exe_suffix() {
        let temp = TempDir::new().unwrap();
        let names = BinaryNames::for_platform(&Platform::new("windows", "amd64"));
        let dir = staging(&temp, &names);
        let wrapper = wrapper_artifact(&temp);

        install_wrapper(&dir, &wrapper, &names, &Runner::default()).unwrap();

        assert_eq!(std::fs::read(dir.join("terragrunt.exe")).unwrap(), b"wrapper artifact");
        assert_eq!(std::fs::read(dir.join("terragrunt-bin.exe")).unwrap(), b"real terragrunt");
        assert!(!dir.join("terragrunt").exists());
    }

    #[test]
    fn test_missing_binary_fails_before_copy() {
        let temp = TempDir::new().unwrap();
        let names = BinaryNames::for_platform(&Platform::new("linux", "amd64"));
        let dir = temp.path().join("empty");
        std::fs::create_dir_all(&dir).unwrap();
        let wrapper = wrapper_artifact(&temp);

        let err = install_wrapper(&dir, &wrapper, &names, &Runner::default()).unwrap_err();
        assert!(matches!(err, Error::Filesystem { .. }));
        assert!(err.to_string().contains("move"));
        assert!(!dir.join("terragrunt").exists());
    }

    #[test]
    fn test_missing_wrapper_leaves_no_tool_entry() {
        let temp = TempDir::new().unwrap();
        let names = BinaryNames::for_platform(&Platform::new("linux", "amd64"));
        let dir = staging(&temp, &names);

        let err = install_wrapper(
            &dir,
            &temp.path().join("missing-wrapper"),
            &names,
            &Runner::default(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("copy"));
        assert!(!dir.join("terragrunt").exists());
        assert!(dir.join("terragrunt-bin").exists());
    }
}
