//! Shared value types used by the link generator and its collaborators.

pub mod activation;
pub mod record;
pub mod token;

pub use activation::{ActivationRequest, ActivationResponse, ActivationStatus};
pub use record::PaymentLinkRecord;
pub use token::TokenType;
