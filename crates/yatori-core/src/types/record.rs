//! Tracking record returned alongside a generated payment link.

use serde::{Deserialize, Serialize};

use super::token::TokenType;

/// A generated link plus the metadata a caller needs to correlate the
/// payment later. Built fresh per call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLinkRecord {
    /// The full deep-link URL.
    pub url: String,
    /// Identifier embedded in the link's `yid` parameter.
    pub yid: String,
    /// Recipient wallet address.
    pub recipient: String,
    /// Requested amount in USDC dollars.
    pub amount: f64,
    /// Creation time, ISO-8601 UTC with a trailing `Z`.
    pub timestamp: String,
    /// Token type embedded in the link.
    pub token: TokenType,
}
