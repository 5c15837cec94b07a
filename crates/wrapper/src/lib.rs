//! Transparent proxy for the Terragrunt CLI.
//!
//! Installed as `terragrunt` when the wrapper is enabled. It runs the real
//! binary, mirrors its output and exposes stdout, stderr and the exit code
//! as step outputs so later workflow steps can consume them.

mod listener;
mod locate;
pub mod proxy;

pub use listener::OutputListener;
pub use locate::{locate_cli, resolve_cli};
pub use proxy::ProxyOutcome;
