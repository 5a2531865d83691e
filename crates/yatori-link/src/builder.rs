//! Payment link composition.
//!
//! [`PaymentLinkBuilder`] validates a request, resolves the token type,
//! and appends the `token`, `to`, `amount` and `yid` query parameters to
//! the deep-link base URL. Validation always runs before the activation
//! lookup, so a rejected request never reaches the network.

use std::sync::Arc;

use tracing::debug;

use yatori_core::config::link::LinkConfig;
use yatori_core::traits::ActivationChecker;
use yatori_core::types::TokenType;

use crate::error::LinkError;
use crate::identifier::IdentifierGenerator;
use crate::validation::{validate_address, validate_positive, validate_range};

/// Strictness switches for a [`PaymentLinkBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPolicy {
    /// Check the configured `[min, max]` range; otherwise only positivity.
    pub enforce_full_range: bool,
    /// Resolve the token type through the activation checker; otherwise
    /// unspecified tokens default to `usdcBasic`.
    pub check_activation: bool,
}

impl LinkPolicy {
    /// Range-checked and activation-aware.
    pub fn enriched() -> Self {
        Self {
            enforce_full_range: true,
            check_activation: true,
        }
    }

    /// Positivity check only, no activation lookup.
    pub fn simple() -> Self {
        Self {
            enforce_full_range: false,
            check_activation: false,
        }
    }

    /// Read the policy flags from the `[link]` configuration section.
    pub fn from_config(config: &LinkConfig) -> Self {
        Self {
            enforce_full_range: config.enforce_full_range,
            check_activation: config.check_activation,
        }
    }
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self::enriched()
    }
}

/// Inputs for a single payment link.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    /// Recipient wallet address.
    pub recipient: String,
    /// Amount in USDC dollars.
    pub amount: f64,
    /// Identifier to embed; generated when `None`.
    pub yid: Option<String>,
    /// Token type to embed; resolved when `None`.
    pub token: Option<TokenType>,
    /// Overrides the configured base URL.
    pub base_url: Option<String>,
    /// Overrides the configured network label.
    pub network: Option<String>,
}

impl PaymentRequest {
    /// A request for `amount` USDC to `recipient` with every option unset.
    pub fn new(recipient: impl Into<String>, amount: f64) -> Self {
        Self {
            recipient: recipient.into(),
            amount,
            yid: None,
            token: None,
            base_url: None,
            network: None,
        }
    }

    /// Set the identifier.
    pub fn with_yid(mut self, yid: impl Into<String>) -> Self {
        self.yid = Some(yid.into());
        self
    }

    /// Set the token type.
    pub fn with_token(mut self, token: TokenType) -> Self {
        self.token = Some(token);
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the network label.
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }
}

/// A composed link together with the values that went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// The full URL.
    pub url: String,
    /// The embedded identifier.
    pub yid: String,
    /// The embedded token type.
    pub token: TokenType,
}

/// Builds Yatori payment request links.
#[derive(Debug)]
pub struct PaymentLinkBuilder {
    config: LinkConfig,
    policy: LinkPolicy,
    checker: Arc<dyn ActivationChecker>,
    identifiers: IdentifierGenerator,
}

impl PaymentLinkBuilder {
    /// Create a builder whose policy comes from `config`.
    pub fn new(config: LinkConfig, checker: Arc<dyn ActivationChecker>) -> Self {
        let policy = LinkPolicy::from_config(&config);
        Self {
            config,
            policy,
            checker,
            identifiers: IdentifierGenerator::new(),
        }
    }

    /// Replace the policy.
    pub fn with_policy(mut self, policy: LinkPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the identifier generator.
    pub fn with_identifier_generator(mut self, identifiers: IdentifierGenerator) -> Self {
        self.identifiers = identifiers;
        self
    }

    /// The active policy.
    pub fn policy(&self) -> LinkPolicy {
        self.policy
    }

    /// The link configuration.
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    pub(crate) fn identifiers(&self) -> &IdentifierGenerator {
        &self.identifiers
    }

    /// Build the URL for `request`.
    pub async fn create_link(&self, request: &PaymentRequest) -> Result<String, LinkError> {
        self.resolve(request).await.map(|link| link.url)
    }

    /// Build the URL for `request`, also returning the resolved yid and token.
    pub async fn resolve(&self, request: &PaymentRequest) -> Result<ResolvedLink, LinkError> {
        self.validate(&request.recipient, request.amount)?;

        let network = request.network.as_deref().unwrap_or(&self.config.network);
        let token = self
            .resolve_token(&request.recipient, request.token, network)
            .await;

        let yid = match &request.yid {
            Some(yid) => yid.clone(),
            None => self.identifiers.generate(self.config.yid_length),
        };

        let base_url = request.base_url.as_deref().unwrap_or(&self.config.base_url);
        let url = compose_url(
            base_url,
            token,
            &request.recipient,
            &format_amount(request.amount),
            &yid,
        );

        debug!(recipient = %request.recipient, %token, %yid, "Payment link created");

        Ok(ResolvedLink { url, yid, token })
    }

    fn validate(&self, recipient: &str, amount: f64) -> Result<(), LinkError> {
        if !validate_address(recipient) {
            return Err(LinkError::InvalidAddress {
                address: recipient.to_string(),
            });
        }

        if self.policy.enforce_full_range {
            validate_range(amount, self.config.min_amount, self.config.max_amount)
        } else {
            validate_positive(amount)
        }
    }

    async fn resolve_token(
        &self,
        recipient: &str,
        explicit: Option<TokenType>,
        network: &str,
    ) -> TokenType {
        if let Some(token) = explicit {
            return token;
        }

        if !self.policy.check_activation {
            return TokenType::default();
        }

        let status = self.checker.check(recipient, network).await;
        let token = TokenType::for_activation(status.is_activated);
        debug!(
            recipient,
            network,
            backend = self.checker.backend(),
            is_activated = status.is_activated,
            check_failed = status.is_failure(),
            %token,
            "Resolved token type"
        );
        token
    }
}

/// Format a dollar amount with exactly two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Append the link query string to `base_url`.
///
/// Values are form-urlencoded, so spaces become `+` and reserved
/// characters are percent-escaped.
pub fn compose_url(
    base_url: &str,
    token: TokenType,
    recipient: &str,
    amount: &str,
    yid: &str,
) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("token", token.as_str())
        .append_pair("to", recipient)
        .append_pair("amount", amount)
        .append_pair("yid", yid)
        .finish();

    format!("{base_url}?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(5.0), "5.00");
        assert_eq!(format_amount(10.5), "10.50");
        assert_eq!(format_amount(0.01), "0.01");
        assert_eq!(format_amount(10_000.0), "10000.00");
    }

    #[test]
    fn test_compose_url() {
        let url = compose_url(
            "https://yatori.io/mobile/yatoriRequest",
            TokenType::UsdcBasic,
            "GvCoHGGBR97Yphzc6SrRycZyS31oUYBM8m9hLRtJT7r5",
            "5.00",
            "a7f3k2m9",
        );
        assert_eq!(
            url,
            "https://yatori.io/mobile/yatoriRequest?token=usdcBasic&to=GvCoHGGBR97Yphzc6SrRycZyS31oUYBM8m9hLRtJT7r5&amount=5.00&yid=a7f3k2m9"
        );
    }

    #[test]
    fn test_compose_url_encodes_values() {
        let url = compose_url(
            "https://example.test/pay",
            TokenType::UsdcCreate,
            "addr",
            "1.00",
            "invoice 12&x=1",
        );
        assert!(url.ends_with("yid=invoice+12%26x%3D1"));
    }

    #[test]
    fn test_policy_from_config() {
        let config = LinkConfig {
            enforce_full_range: false,
            check_activation: true,
            ..Default::default()
        };
        let policy = LinkPolicy::from_config(&config);
        assert!(!policy.enforce_full_range);
        assert!(policy.check_activation);
        assert_eq!(LinkPolicy::default(), LinkPolicy::enriched());
    }
}
