//! Activation checker with a fixed answer.

use async_trait::async_trait;

use yatori_core::traits::ActivationChecker;
use yatori_core::types::ActivationStatus;

/// Status label reported by [`StaticActivationChecker`].
pub const STATIC_STATUS: &str = "Not checked";

/// Returns the same answer for every address without touching the network.
///
/// The default answer is "not activated", which selects the account-creating
/// link variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticActivationChecker {
    is_activated: bool,
}

impl StaticActivationChecker {
    /// Create a checker that always answers `is_activated`.
    pub fn new(is_activated: bool) -> Self {
        Self { is_activated }
    }
}

#[async_trait]
impl ActivationChecker for StaticActivationChecker {
    async fn check(&self, _address: &str, _network: &str) -> ActivationStatus {
        ActivationStatus {
            is_activated: self.is_activated,
            status: Some(STATIC_STATUS.to_string()),
            error: None,
        }
    }

    fn backend(&self) -> &str {
        "static"
    }
}
