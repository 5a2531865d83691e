//! Yatori CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use yatori_core::config::AppConfig;
use yatori_core::config::logging::LoggingConfig;

mod commands;
mod output;

use commands::Cli;
use output::Notice;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            output::notify(Notice::Failure, &format!("Failed to load configuration: {e}"));
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = cli.execute(config).await {
        output::notify(Notice::Failure, &e.to_string());
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr so stdout carries only command output.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
