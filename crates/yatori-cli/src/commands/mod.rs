//! CLI command definitions and dispatch.

pub mod check;
pub mod config;
pub mod link;
pub mod track;
pub mod validate;
pub mod yid;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use yatori_core::config::AppConfig;
use yatori_core::error::AppError;
use yatori_core::traits::ActivationChecker;
use yatori_link::{HttpActivationChecker, LinkPolicy, PaymentLinkBuilder, StaticActivationChecker};

/// Yatori: USDC payment request links for the Yatori mobile app
#[derive(Debug, Parser)]
#[command(name = "yatori", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file. Without it, config/default.toml is read
    /// from the current working directory if it exists
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a payment link
    Link(link::LinkArgs),
    /// Create a payment link with tracking metadata
    Track(track::TrackArgs),
    /// Generate random identifiers
    Yid(yid::YidArgs),
    /// Validate wallet addresses
    Validate(validate::ValidateArgs),
    /// Check whether a wallet's USDC account is activated
    Check(check::CheckArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Link(args) => link::execute(args, &config, self.format).await,
            Commands::Track(args) => track::execute(args, &config, self.format).await,
            Commands::Yid(args) => yid::execute(args, &config, self.format),
            Commands::Validate(args) => validate::execute(args, self.format),
            Commands::Check(args) => check::execute(args, &config, self.format).await,
            Commands::Config(args) => {
                config::execute(args, &config, self.config.as_deref(), self.format).await
            }
        }
    }
}

/// Helper: build a link builder from config and per-command switches
pub fn build_link_builder(
    config: &AppConfig,
    offline: bool,
    simple: bool,
) -> Result<PaymentLinkBuilder, AppError> {
    let checker: Arc<dyn ActivationChecker> = if offline {
        Arc::new(StaticActivationChecker::default())
    } else {
        Arc::new(HttpActivationChecker::from_config(&config.activation)?)
    };

    tracing::debug!(backend = checker.backend(), offline, simple, "Link builder ready");

    let builder = PaymentLinkBuilder::new(config.link.clone(), checker);
    if simple {
        Ok(builder.with_policy(LinkPolicy::simple()))
    } else {
        Ok(builder)
    }
}
