//! Payment links packaged with tracking metadata.

use chrono::{SecondsFormat, Utc};
use tracing::info;

use yatori_core::types::{PaymentLinkRecord, TokenType};

use crate::builder::{PaymentLinkBuilder, PaymentRequest};
use crate::error::LinkError;

/// Inputs for a tracked payment link.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingRequest {
    /// Recipient wallet address.
    pub recipient: String,
    /// Amount in USDC dollars.
    pub amount: f64,
    /// Text placed before the random part of the identifier.
    pub prefix: Option<String>,
    /// Token type to embed; resolved when `None`.
    pub token: Option<TokenType>,
    /// Overrides the configured network label.
    pub network: Option<String>,
}

impl TrackingRequest {
    /// A tracked request for `amount` USDC to `recipient`.
    pub fn new(recipient: impl Into<String>, amount: f64) -> Self {
        Self {
            recipient: recipient.into(),
            amount,
            prefix: None,
            token: None,
            network: None,
        }
    }

    /// Set the identifier prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the token type.
    pub fn with_token(mut self, token: TokenType) -> Self {
        self.token = Some(token);
        self
    }

    /// Set the network label.
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }
}

impl PaymentLinkBuilder {
    /// Build a link with a prefixed random identifier and return it with
    /// its tracking metadata.
    ///
    /// The record's token is the one embedded in the URL; the activation
    /// service is consulted at most once.
    pub async fn create_link_with_tracking(
        &self,
        request: &TrackingRequest,
    ) -> Result<PaymentLinkRecord, LinkError> {
        let yid = self
            .identifiers()
            .generate_prefixed(request.prefix.as_deref(), self.config().tracking_yid_length);

        let link_request = PaymentRequest {
            recipient: request.recipient.clone(),
            amount: request.amount,
            yid: Some(yid),
            token: request.token,
            base_url: None,
            network: request.network.clone(),
        };
        let link = self.resolve(&link_request).await?;

        info!(yid = %link.yid, token = %link.token, "Tracked payment link created");

        Ok(PaymentLinkRecord {
            url: link.url,
            yid: link.yid,
            recipient: request.recipient.clone(),
            amount: request.amount,
            timestamp: utc_timestamp(),
            token: link.token,
        })
    }
}

/// Current UTC time as ISO-8601 with microseconds and a trailing `Z`.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
