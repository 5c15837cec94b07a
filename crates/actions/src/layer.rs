//! Tracing layer rendering events as workflow commands.
//!
//! Warnings and errors become annotations on the job summary, debug events
//! only show up when the job runs with step debug logging, and info events
//! are printed as plain log lines.

use std::fmt::Write as _;
use std::io::Write as _;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::Context;

use crate::command::WorkflowCommand;

/// A tracing Layer that writes workflow commands for each event.
pub struct WorkflowCommandLayer<W = fn() -> std::io::Stdout> {
    make_writer: W,
}

impl WorkflowCommandLayer {
    /// Write commands to stdout, where the runner reads them.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            make_writer: std::io::stdout,
        }
    }
}

impl<W> WorkflowCommandLayer<W> {
    /// Write commands through a custom writer.
    #[must_use]
    pub fn with_writer(make_writer: W) -> Self {
        Self { make_writer }
    }
}

impl<S, W> Layer<S> for WorkflowCommandLayer<W>
where
    S: Subscriber,
    W: for<'a> MakeWriter<'a> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let text = visitor.finish();

        let line = match *event.metadata().level() {
            Level::ERROR => WorkflowCommand::Error.format(&text),
            Level::WARN => WorkflowCommand::Warning.format(&text),
            Level::INFO => text,
            _ => WorkflowCommand::Debug.format(&text),
        };

        let mut writer = self.make_writer.make_writer();
        let _ = writeln!(writer, "{line}");
    }
}

/// Collects the message and appends the remaining fields as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.trim_start().to_string()
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::registry()
            .with(WorkflowCommandLayer::with_writer(move || writer.clone()));
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    #[test]
    fn test_levels_map_to_commands() {
        let output = capture(|| {
            tracing::error!("boom");
            tracing::warn!("careful");
            tracing::info!("hello");
            tracing::debug!("details");
        });
        assert_eq!(
            output,
            "::error::boom\n::warning::careful\nhello\n::debug::details\n"
        );
    }

    #[test]
    fn test_fields_are_appended() {
        let output = capture(|| {
            let tag = "v0.57.13";
            tracing::debug!(%tag, assets = 8, "Fetched release");
        });
        assert_eq!(output, "::debug::Fetched release tag=v0.57.13 assets=8\n");
    }

    #[test]
    fn test_string_fields_are_unquoted() {
        let output = capture(|| {
            tracing::info!(name = "TERRAGRUNT_CLI_PATH", "Exporting");
        });
        assert_eq!(output, "Exporting name=TERRAGRUNT_CLI_PATH\n");
    }

    #[test]
    fn test_multiline_messages_are_escaped() {
        let output = capture(|| {
            tracing::error!("first\nsecond");
        });
        assert_eq!(output, "::error::first%0Asecond\n");
    }
}
