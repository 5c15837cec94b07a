//! GitHub Actions runner integration.
//!
//! - [`Runner`] - file commands: `GITHUB_PATH`, `GITHUB_ENV`, `GITHUB_OUTPUT`
//! - [`WorkflowCommandLayer`] - a tracing layer emitting `::warning::` style
//!   workflow commands
//! - [`is_actions`] - detection of the Actions environment

mod command;
mod layer;
mod runner;

pub use command::{WorkflowCommand, escape_data};
pub use layer::WorkflowCommandLayer;
pub use runner::{Runner, is_actions};
