//! Query the activation service for a wallet.

use clap::Args;

use crate::output::{self, Notice, OutputFormat};
use yatori_core::config::AppConfig;
use yatori_core::error::AppError;
use yatori_core::traits::ActivationChecker;
use yatori_link::{HttpActivationChecker, LinkError, validate_address};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Wallet address to look up
    pub address: String,

    /// Override the Solana network label
    #[arg(long)]
    pub network: Option<String>,
}

/// Execute the check command
pub async fn execute(
    args: &CheckArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    if !validate_address(&args.address) {
        return Err(LinkError::InvalidAddress {
            address: args.address.clone(),
        }
        .into());
    }

    let network = args.network.as_deref().unwrap_or(&config.link.network);
    let checker = HttpActivationChecker::from_config(&config.activation)?;
    let status = checker.check(&args.address, network).await;

    match format {
        OutputFormat::Table => {
            if let Some(error) = &status.error {
                output::notify(Notice::Warning, &format!("Activation check failed: {error}"));
            }
            output::activation_details(&args.address, network, &status).print();
        }
        OutputFormat::Json => output::print_json(&status)?,
    }

    Ok(())
}
