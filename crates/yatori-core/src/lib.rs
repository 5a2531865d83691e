//! # yatori-core
//!
//! Core crate for the Yatori payment link generator. Contains the
//! activation-check trait, configuration schemas, shared wire types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Yatori crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
