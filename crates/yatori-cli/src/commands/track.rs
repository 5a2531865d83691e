//! Create a payment link with tracking metadata.

use clap::Args;

use crate::output::{self, OutputFormat};
use yatori_core::config::AppConfig;
use yatori_core::error::AppError;
use yatori_core::types::TokenType;
use yatori_link::TrackingRequest;

/// Arguments for the track command
#[derive(Debug, Args)]
pub struct TrackArgs {
    /// Recipient Solana wallet address
    pub recipient: String,

    /// Amount in USDC dollars
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Prefix for the identifier (e.g. "invoice_123_")
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Token type: usdcBasic or usdcCreate (detected when omitted)
    #[arg(long)]
    pub token: Option<TokenType>,

    /// Override the Solana network label
    #[arg(long)]
    pub network: Option<String>,

    /// Skip the activation service and assume the account is not activated
    #[arg(long)]
    pub offline: bool,
}

/// Execute the track command
pub async fn execute(
    args: &TrackArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let builder = super::build_link_builder(config, args.offline, false)?;

    let request = TrackingRequest {
        recipient: args.recipient.clone(),
        amount: args.amount,
        prefix: args.prefix.clone(),
        token: args.token,
        network: args.network.clone(),
    };

    let record = builder.create_link_with_tracking(&request).await?;

    match format {
        OutputFormat::Table => output::record_details(&record).print(),
        OutputFormat::Json => output::print_json(&record)?,
    }

    Ok(())
}
