use std::process::ExitCode;

use clap::Parser;
use restock_notifier::cli::{self, Cli};
use restock_notifier::error::error_chain;
use restock_notifier::logger::init_logger;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match cli::load_config(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", error_chain(&e));
            return ExitCode::FAILURE;
        }
    };

    let logger_config = match cli::logger_config(&cli, &settings) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Logger configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logger(logger_config) {
        eprintln!("Logger initialization error: {:#}", e);
        return ExitCode::FAILURE;
    }

    tracing::debug!(version = restock_notifier::pkg_version(), "Starting run");

    match cli::execute_command(&cli, settings).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %error_chain(&e), "Run failed");
            eprintln!("Error: {}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}
