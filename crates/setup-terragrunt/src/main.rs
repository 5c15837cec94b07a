use std::process::ExitCode;

use setup_terragrunt::cli::parse;
use setup_terragrunt::tracing::{TracingConfig, init_tracing};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = parse();

    let config = TracingConfig {
        format: cli.tracing_format(),
        level: cli.log_level().into(),
    };
    if let Err(err) = init_tracing(config) {
        #[allow(clippy::print_stderr)]
        {
            eprintln!("{err:?}");
        }
        return ExitCode::FAILURE;
    }

    match setup_terragrunt::run(&cli).await {
        Ok(installation) => {
            info!(
                version = %installation.release.tag_name,
                platform = %installation.platform,
                path = %installation.path.display(),
                wrapped = installation.wrapped,
                "Terragrunt installed"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Failures are reported once, here.
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
