//! HTTP client for the `is-usdc-acct-activated` service.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use yatori_core::config::activation::ActivationConfig;
use yatori_core::error::{AppError, ErrorKind};
use yatori_core::result::AppResult;
use yatori_core::traits::ActivationChecker;
use yatori_core::types::{ActivationRequest, ActivationResponse, ActivationStatus};

/// Activation checker that POSTs to the remote activation service.
///
/// Transport errors, timeouts, non-2xx responses and malformed bodies are
/// all absorbed into [`ActivationStatus::failed`].
#[derive(Debug, Clone)]
pub struct HttpActivationChecker {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpActivationChecker {
    /// Create a checker for `endpoint` with a per-request `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to create HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Create a checker around a preconfigured client.
    ///
    /// The client's own timeout and proxy settings apply unchanged.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Create a checker from the `[activation]` configuration section.
    pub fn from_config(config: &ActivationConfig) -> AppResult<Self> {
        Self::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// The endpoint this checker posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self, address: &str, network: &str) -> Result<ActivationStatus, reqwest::Error> {
        let body = ActivationRequest {
            address: address.to_string(),
            network: network.to_string(),
        };

        self.client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<ActivationResponse>()
            .await
            .map(ActivationStatus::from)
    }
}

#[async_trait]
impl ActivationChecker for HttpActivationChecker {
    async fn check(&self, address: &str, network: &str) -> ActivationStatus {
        match self.request(address, network).await {
            Ok(status) => {
                debug!(
                    address,
                    network,
                    is_activated = status.is_activated,
                    "Activation check completed"
                );
                status
            }
            Err(e) => {
                warn!(
                    address,
                    network,
                    endpoint = %self.endpoint,
                    "Activation check failed, assuming not activated: {e}"
                );
                ActivationStatus::failed(e.to_string())
            }
        }
    }

    fn backend(&self) -> &str {
        "http"
    }
}
