use clap::Parser;
use dotenv::dotenv;
use std::process::ExitCode;
use toggl_reporter::commands::Cli;
use toggl_reporter::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "toggl_reporter=debug";

fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists
    let _ = dotenv();
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return match error.use_stderr() {
                true => ExitCode::FAILURE,
                false => ExitCode::SUCCESS,
            };
        }
    };

    match cli.menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(?error, "run failed");
            // Diagnostics stay on stdout even when tracing is on.
            println!("{}", error);
            ExitCode::from(error.exit_code())
        }
    }
}
