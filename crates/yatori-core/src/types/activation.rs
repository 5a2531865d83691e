//! Request and response bodies for the USDC account activation service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status label attached to a check that could not be completed.
pub const CHECK_FAILED_STATUS: &str = "Check failed";

/// JSON body posted to the activation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRequest {
    /// Recipient wallet address.
    pub address: String,
    /// Solana cluster label, e.g. `mainnet-beta`.
    pub network: String,
}

/// Body returned by the activation endpoint.
///
/// Only `isActivated` is decoded strictly; a missing flag reads as `false`.
/// `status` is accepted in any JSON shape and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationResponse {
    #[serde(default)]
    pub is_activated: bool,
    #[serde(default)]
    pub status: Option<Value>,
}

impl From<ActivationResponse> for ActivationStatus {
    fn from(response: ActivationResponse) -> Self {
        let status = match response.status {
            None | Some(Value::Null) => None,
            Some(Value::String(label)) => Some(label),
            Some(other) => Some(other.to_string()),
        };

        Self {
            is_activated: response.is_activated,
            status,
            error: None,
        }
    }
}

/// Outcome of an activation check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationStatus {
    /// Whether the recipient's USDC token account already exists.
    #[serde(default)]
    pub is_activated: bool,
    /// Free-form status reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Diagnostic for a check that failed locally. Never read from input.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActivationStatus {
    /// A successful answer with no extra detail.
    pub fn activated(is_activated: bool) -> Self {
        Self {
            is_activated,
            ..Default::default()
        }
    }

    /// The conservative "not activated" answer for a check that failed.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            is_activated: false,
            status: Some(CHECK_FAILED_STATUS.to_string()),
            error: Some(reason.into()),
        }
    }

    /// Whether this status came from a failed check.
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
