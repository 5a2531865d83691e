//! Input validation errors for link generation.
//!
//! Every variant is raised before any network call is made. Activation
//! lookups never produce a `LinkError`.

use thiserror::Error;
use yatori_core::error::AppError;

/// Which end of the amount range was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountBound {
    /// Below the configured minimum.
    Minimum,
    /// Above the configured maximum.
    Maximum,
}

impl AmountBound {
    fn phrase(&self) -> &'static str {
        match self {
            Self::Minimum => "at least",
            Self::Maximum => "under",
        }
    }
}

/// Errors raised while validating a payment link request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinkError {
    /// Recipient failed the syntactic Solana address check.
    #[error("Invalid Solana address: {address}")]
    InvalidAddress {
        /// The rejected address.
        address: String,
    },

    /// Amount fell outside the configured range.
    #[error("Amount must be {} ${limit:.2} USDC, got ${amount}", .bound.phrase())]
    AmountOutOfRange {
        /// The violated bound.
        bound: AmountBound,
        /// The configured value of that bound.
        limit: f64,
        /// The offending amount.
        amount: f64,
    },

    /// Amount was zero, negative, or not a finite number.
    #[error("Amount must be greater than 0, got {amount}")]
    AmountNonPositive {
        /// The offending amount.
        amount: f64,
    },
}

impl From<LinkError> for AppError {
    fn from(err: LinkError) -> Self {
        AppError::validation(err.to_string())
    }
}
