//! Validate wallet addresses.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use yatori_core::error::AppError;
use yatori_link::validate_address;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Addresses to check
    #[arg(required = true)]
    pub addresses: Vec<String>,
}

/// Address validation display row
#[derive(Debug, Serialize, Tabled)]
struct AddressRow {
    /// Address as given
    address: String,
    /// Length in characters
    length: usize,
    /// Whether the address passed
    valid: bool,
}

impl AddressRow {
    fn check(address: &str) -> Self {
        Self {
            address: address.to_string(),
            length: address.chars().count(),
            valid: validate_address(address),
        }
    }
}

/// Execute the validate command
///
/// Fails when any address is invalid so scripts can test the exit status.
pub fn execute(args: &ValidateArgs, format: OutputFormat) -> Result<(), AppError> {
    let rows: Vec<AddressRow> = args.addresses.iter().map(|a| AddressRow::check(a)).collect();
    output::print_rows(&rows, format)?;

    let invalid = rows.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        return Err(AppError::validation(format!(
            "{} of {} addresses are invalid",
            invalid,
            rows.len()
        )));
    }

    Ok(())
}
