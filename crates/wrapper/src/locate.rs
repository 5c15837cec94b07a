//! Lookup of the real Terragrunt binary.

use setup_terragrunt_core::{
    CLI_BIN_VAR, CLI_PATH_VAR, Error, Platform, Result, WRAPPED_BINARY_NAME,
};
use std::ffi::OsString;
use std::path::PathBuf;

/// Find the real binary from the variables exported at install time.
pub fn locate_cli() -> Result<PathBuf> {
    resolve_cli(
        std::env::var_os(CLI_BIN_VAR),
        std::env::var_os(CLI_PATH_VAR),
        &Platform::current(),
    )
}

/// `bin` wins over `dir`. Empty values count as unset.
pub fn resolve_cli(
    bin: Option<OsString>,
    dir: Option<OsString>,
    platform: &Platform,
) -> Result<PathBuf> {
    if let Some(bin) = bin.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(bin));
    }
    if let Some(dir) = dir.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir).join(platform.executable_name(WRAPPED_BINARY_NAME)));
    }
    Err(Error::configuration(format!(
        "neither {CLI_BIN_VAR} nor {CLI_PATH_VAR} is set; was Terragrunt installed with the wrapper enabled?"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux() -> Platform {
        Platform::new("linux", "amd64")
    }

    #[test]
    fn test_bin_takes_precedence() {
        let path = resolve_cli(
            Some("/cache/terragrunt/0.57.13/amd64/terragrunt-bin".into()),
            Some("/elsewhere".into()),
            &linux(),
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/cache/terragrunt/0.57.13/amd64/terragrunt-bin"));
    }

    #[test]
    fn test_dir_fallback() {
        let path = resolve_cli(None, Some("/cache/terragrunt".into()), &linux()).unwrap();
        assert_eq!(path, PathBuf::from("/cache/terragrunt/terragrunt-bin"));

        let windows = Platform::new("windows", "amd64");
        let path = resolve_cli(Some("".into()), Some("C:/cache".into()), &windows).unwrap();
        assert_eq!(path, PathBuf::from("C:/cache").join("terragrunt-bin.exe"));
    }

    #[test]
    fn test_nothing_set() {
        let err = resolve_cli(None, Some("".into()), &linux()).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("TERRAGRUNT_CLI_BIN"));
    }

    #[test]
    fn test_locate_from_environment() {
        temp_env::with_vars(
            [
                ("TERRAGRUNT_CLI_BIN", None),
                ("TERRAGRUNT_CLI_PATH", Some("/opt/terragrunt")),
            ],
            || {
                let path = locate_cli().unwrap();
                assert_eq!(path.parent().unwrap(), PathBuf::from("/opt/terragrunt"));
            },
        );
        temp_env::with_vars_unset(["TERRAGRUNT_CLI_BIN", "TERRAGRUNT_CLI_PATH"], || {
            assert!(locate_cli().is_err());
        });
    }
}
