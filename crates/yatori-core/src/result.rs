//! Convenience result type alias for Yatori.

use crate::error::AppError;

/// A specialized `Result` type for Yatori operations.
pub type AppResult<T> = Result<T, AppError>;
