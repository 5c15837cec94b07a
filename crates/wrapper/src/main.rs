use std::process::ExitCode;

use setup_terragrunt_actions::Runner;
use terragrunt_wrapper::{locate_cli, proxy};
use tracing::error;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Stdout belongs to the wrapped binary.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    let args: Vec<_> = std::env::args_os().skip(1).collect();

    let program = match locate_cli() {
        Ok(program) => program,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match proxy::run(&program, &args).await {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = outcome.publish(&Runner::from_env()) {
        error!("{err}");
    }

    std::process::exit(outcome.exit_code)
}
