//! Link composition and validation configuration.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Settings for composing payment links.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_amount_bounds"))]
pub struct LinkConfig {
    /// Deep-link base the query string is appended to.
    #[validate(url)]
    pub base_url: String,
    /// Solana cluster label passed to the activation service.
    #[validate(length(min = 1))]
    pub network: String,
    /// Smallest accepted amount in USDC dollars (inclusive).
    pub min_amount: f64,
    /// Largest accepted amount in USDC dollars (inclusive).
    pub max_amount: f64,
    /// Length of generated identifiers for plain links.
    #[validate(range(min = 1, max = 64))]
    pub yid_length: usize,
    /// Length of the random part of tracking identifiers.
    #[validate(range(min = 1, max = 64))]
    pub tracking_yid_length: usize,
    /// Enforce `[min_amount, max_amount]` instead of positivity only.
    pub enforce_full_range: bool,
    /// Ask the activation service which token type to use.
    pub check_activation: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            network: default_network(),
            min_amount: default_min_amount(),
            max_amount: default_max_amount(),
            yid_length: default_yid_length(),
            tracking_yid_length: default_tracking_yid_length(),
            enforce_full_range: true,
            check_activation: true,
        }
    }
}

fn validate_amount_bounds(config: &LinkConfig) -> Result<(), ValidationError> {
    if !(config.min_amount > 0.0 && config.min_amount < config.max_amount) {
        return Err(ValidationError::new("amount_bounds")
            .with_message("min_amount must be positive and below max_amount".into()));
    }
    Ok(())
}

fn default_base_url() -> String {
    "https://yatori.io/mobile/yatoriRequest".to_string()
}

fn default_network() -> String {
    "mainnet-beta".to_string()
}

fn default_min_amount() -> f64 {
    0.01
}

fn default_max_amount() -> f64 {
    10_000.00
}

fn default_yid_length() -> usize {
    10
}

fn default_tracking_yid_length() -> usize {
    8
}
