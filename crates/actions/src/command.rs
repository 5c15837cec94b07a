//! Workflow commands (`::name::message`) written to stdout.

/// Commands the log layer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowCommand {
    /// Shown only when step debug logging is enabled.
    Debug,
    /// Shown as a warning annotation.
    Warning,
    /// Shown as an error annotation.
    Error,
}

impl WorkflowCommand {
    /// Command keyword.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Render the command line for `message`, without a trailing newline.
    #[must_use]
    pub fn format(self, message: &str) -> String {
        format!("::{}::{}", self.name(), escape_data(message))
    }
}

/// Escape a command payload so it stays on one line.
#[must_use]
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(
            WorkflowCommand::Warning.format("falling back"),
            "::warning::falling back"
        );
        assert_eq!(WorkflowCommand::Error.format("boom"), "::error::boom");
        assert_eq!(WorkflowCommand::Debug.format(""), "::debug::");
    }

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("50% done"), "50%25 done");
        assert_eq!(escape_data("a\r\nb"), "a%0D%0Ab");
        assert_eq!(escape_data("%0A"), "%250A");
    }
}
