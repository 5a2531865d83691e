//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, Details, Notice, OutputFormat};
use yatori_core::config::AppConfig;
use yatori_core::error::AppError;

/// Default configuration shipped with the repository.
const DEFAULT_CONFIG: &str = include_str!("../../../../config/default.toml");

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration
    Validate,
    /// Write the default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
///
/// The configuration has already been loaded and validated by the time
/// this runs, so `validate` only reports what was loaded.
pub async fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => output::print_json(config)?,
            OutputFormat::Table => summary(config).print(),
        },
        ConfigCommand::Validate => {
            let source = config_path.unwrap_or("defaults");
            output::notify(Notice::Done, &format!("Configuration '{source}' is valid"));
            summary(config).print();
        }
        ConfigCommand::Generate { output: out_path } => {
            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(out_path, DEFAULT_CONFIG).await?;

            output::notify(Notice::Done, &format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}

fn summary(config: &AppConfig) -> Details {
    Details::new()
        .row("Base URL", config.link.base_url.as_str())
        .row("Network", config.link.network.as_str())
        .row(
            "Amount range",
            format!("${:.2} - ${:.2}", config.link.min_amount, config.link.max_amount),
        )
        .row("Full range", config.link.enforce_full_range.to_string())
        .row("Activation", config.link.check_activation.to_string())
        .row("Endpoint", config.activation.endpoint.as_str())
        .row("Timeout", format!("{}s", config.activation.timeout_seconds))
        .row("Log level", config.logging.level.as_str())
}
