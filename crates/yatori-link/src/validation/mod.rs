//! Syntactic checks applied to link requests before any I/O.

pub mod address;
pub mod amount;

pub use address::validate_address;
pub use amount::{validate_positive, validate_range};
