//! Activation checker implementations.
//!
//! - [`http::HttpActivationChecker`]: asks the remote activation service.
//! - [`fixed::StaticActivationChecker`]: answers without I/O (offline mode).

pub mod fixed;
pub mod http;

pub use fixed::StaticActivationChecker;
pub use http::HttpActivationChecker;

/// Network label used when the caller does not name one.
pub const DEFAULT_NETWORK: &str = "mainnet-beta";
