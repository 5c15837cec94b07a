//! Command-line interface of the installer.

use crate::tracing::{LogLevel, TracingFormat};
use clap::{ArgAction, Parser};
use setup_terragrunt_tools_github::{DEFAULT_API_URL, DEFAULT_REPOSITORY};
use std::path::PathBuf;

/// Command-line arguments, each falling back to the variable the runner sets.
#[derive(Parser, Debug)]
#[command(name = "setup-terragrunt")]
#[command(about = "Install a pinned Terragrunt release and publish it on PATH")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Terragrunt version to install, with or without a leading v
    #[arg(long, env = "INPUT_TERRAGRUNT_VERSION")]
    pub terragrunt_version: Option<String>,

    /// Install the output-capturing wrapper (only "true" enables it)
    #[arg(
        long,
        env = "INPUT_TERRAGRUNT_WRAPPER",
        default_value = "false",
        action = ArgAction::Set,
        value_parser = parse_toggle
    )]
    pub terragrunt_wrapper: bool,

    /// Tool cache root directory
    #[arg(long, env = "RUNNER_TOOL_CACHE")]
    pub tool_cache: Option<PathBuf>,

    /// Directory for downloads
    #[arg(long, env = "RUNNER_TEMP")]
    pub temp_dir: Option<PathBuf>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Repository Terragrunt is released from
    #[arg(long, env = "SETUP_TERRAGRUNT_REPOSITORY", default_value = DEFAULT_REPOSITORY)]
    pub repository: String,

    /// Wrapper executable to install (defaults to terragrunt-wrapper next to this binary)
    #[arg(long, env = "SETUP_TERRAGRUNT_WRAPPER_BIN")]
    pub wrapper_bin: Option<PathBuf>,

    /// Token for the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Set logging level
    #[arg(short = 'l', long, value_enum)]
    pub level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<TracingFormat>,
}

impl Cli {
    /// Log format, `actions` when running inside a workflow.
    pub fn tracing_format(&self) -> TracingFormat {
        self.log_format.unwrap_or(if setup_terragrunt_actions::is_actions() {
            TracingFormat::Actions
        } else {
            TracingFormat::Pretty
        })
    }

    /// Log level. Under workflow commands debug events only show with step
    /// debugging enabled, so they are emitted by default.
    pub fn log_level(&self) -> LogLevel {
        self.level.unwrap_or(match self.tracing_format() {
            TracingFormat::Actions => LogLevel::Debug,
            _ => LogLevel::Info,
        })
    }
}

fn parse_toggle(value: &str) -> Result<bool, String> {
    Ok(value == "true")
}

/// Parse arguments from the process.
pub fn parse() -> Cli {
    Cli::parse()
}
