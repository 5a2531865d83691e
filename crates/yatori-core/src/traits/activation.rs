//! Activation checker trait for pluggable account-status lookups.

use async_trait::async_trait;

use crate::types::activation::ActivationStatus;

/// Looks up whether a recipient's USDC token account is initialized.
///
/// Implementations never fail: a lookup that cannot be completed must
/// return [`ActivationStatus::failed`], which reads as "not activated".
#[async_trait]
pub trait ActivationChecker: Send + Sync + std::fmt::Debug + 'static {
    /// Check the activation status of `address` on `network`.
    async fn check(&self, address: &str, network: &str) -> ActivationStatus;

    /// Short name of the backend, used in logs.
    fn backend(&self) -> &str;
}
