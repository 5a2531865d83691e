//! # yatori-link
//!
//! Generates Yatori deep links that ask the mobile app to request a USDC
//! transfer to a Solana wallet.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use yatori_core::config::link::LinkConfig;
//! use yatori_link::{HttpActivationChecker, PaymentLinkBuilder, PaymentRequest};
//! use yatori_core::config::activation::ActivationConfig;
//!
//! # async fn run() -> yatori_core::AppResult<()> {
//! let checker = HttpActivationChecker::from_config(&ActivationConfig::default())?;
//! let builder = PaymentLinkBuilder::new(LinkConfig::default(), Arc::new(checker));
//!
//! let url = builder
//!     .create_link(&PaymentRequest::new("GvCoHGGBR97Yphzc6SrRycZyS31oUYBM8m9hLRtJT7r5", 5.0))
//!     .await?;
//! println!("{url}");
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod builder;
pub mod error;
pub mod identifier;
pub mod tracking;
pub mod validation;

pub use activation::{DEFAULT_NETWORK, HttpActivationChecker, StaticActivationChecker};
pub use builder::{
    LinkPolicy, PaymentLinkBuilder, PaymentRequest, ResolvedLink, compose_url, format_amount,
};
pub use error::{AmountBound, LinkError};
pub use identifier::{DEFAULT_YID_LENGTH, IdentifierGenerator, generate_yid};
pub use tracking::{TrackingRequest, utc_timestamp};
pub use validation::validate_address;
