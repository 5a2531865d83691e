//! Create a payment link.

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use yatori_core::config::AppConfig;
use yatori_core::error::AppError;
use yatori_core::types::TokenType;
use yatori_link::PaymentRequest;

/// Arguments for the link command
#[derive(Debug, Args)]
pub struct LinkArgs {
    /// Recipient Solana wallet address
    pub recipient: String,

    /// Amount in USDC dollars (e.g. 5 for $5.00)
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Identifier to embed (generated when omitted)
    #[arg(long)]
    pub yid: Option<String>,

    /// Token type: usdcBasic or usdcCreate (detected when omitted)
    #[arg(long)]
    pub token: Option<TokenType>,

    /// Override the deep-link base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the Solana network label
    #[arg(long)]
    pub network: Option<String>,

    /// Only require a positive amount and skip the activation check
    #[arg(long)]
    pub simple: bool,

    /// Skip the activation service and assume the account is not activated
    #[arg(long)]
    pub offline: bool,
}

/// JSON shape of the link command output
#[derive(Debug, Serialize)]
struct LinkOutput {
    url: String,
    yid: String,
    token: TokenType,
}

/// Execute the link command
pub async fn execute(
    args: &LinkArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let builder = super::build_link_builder(config, args.offline, args.simple)?;

    let request = PaymentRequest {
        recipient: args.recipient.clone(),
        amount: args.amount,
        yid: args.yid.clone(),
        token: args.token,
        base_url: args.base_url.clone(),
        network: args.network.clone(),
    };

    let link = builder.resolve(&request).await?;

    match format {
        OutputFormat::Table => println!("{}", link.url),
        OutputFormat::Json => output::print_json(&LinkOutput {
            url: link.url,
            yid: link.yid,
            token: link.token,
        })?,
    }

    Ok(())
}
