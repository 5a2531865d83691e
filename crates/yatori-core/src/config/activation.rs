//! Activation service configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Settings for the remote USDC account activation check.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ActivationConfig {
    /// Full URL of the `is-usdc-acct-activated` endpoint.
    #[validate(url)]
    pub endpoint: String,
    /// Request timeout in seconds.
    #[validate(range(min = 1, max = 120))]
    pub timeout_seconds: u64,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "https://yumi-muddy-darkness-7179.fly.dev/is-usdc-acct-activated".to_string()
}

fn default_timeout() -> u64 {
    10
}
